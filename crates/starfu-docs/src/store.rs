//! Content store: discovered documents and TOC descriptors.
//!
//! The store is built once from whatever discovery produced (a filesystem
//! walk, a build-time registry, a test fixture) and never changes afterwards.
//! Documents are kept sorted by path so every derived ordering is
//! reproducible regardless of discovery order.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::path::{is_under, normalize, to_forward_slashes};
use crate::toc::{TocConfig, parse_toc_config};

/// File stem of TOC descriptors.
pub const TOC_FILE_STEM: &str = "_toc";

/// Descriptor extensions in lookup preference order.
pub const TOC_EXTENSIONS: &[&str] = &["yaml", "json"];

/// One discovered content document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Filesystem path with forward slashes (unique key).
    pub path: String,
    /// Title from front matter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw document source, not interpreted here.
    pub body: String,
}

impl Document {
    /// Create a document without a title.
    #[must_use]
    pub fn new(path: &str, body: impl Into<String>) -> Self {
        Self {
            path: to_forward_slashes(path).into_owned(),
            title: None,
            body: body.into(),
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Immutable index of documents and raw TOC descriptors.
#[derive(Debug, Default)]
pub struct ContentStore {
    documents: Vec<Document>,
    tocs: HashMap<String, Value>,
}

impl ContentStore {
    /// Build a store from documents and `(descriptor file path, raw value)` pairs.
    ///
    /// When two documents share a path, the first one wins.
    #[must_use]
    pub fn new(
        documents: impl IntoIterator<Item = Document>,
        tocs: impl IntoIterator<Item = (String, Value)>,
    ) -> Self {
        let mut documents: Vec<Document> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));
        documents.dedup_by(|later, earlier| later.path == earlier.path);

        let tocs = tocs
            .into_iter()
            .map(|(path, raw)| (to_forward_slashes(&path).into_owned(), raw))
            .collect();

        Self { documents, tocs }
    }

    /// Start building a store incrementally.
    #[must_use]
    pub fn builder() -> ContentStoreBuilder {
        ContentStoreBuilder::default()
    }

    /// All documents, sorted by path.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every document path, sorted.
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.path.as_str())
    }

    /// Documents lying strictly under `root`, in path order.
    pub fn documents_under<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a Document> {
        self.documents
            .iter()
            .filter(move |doc| is_under(&doc.path, root))
    }

    /// Path of the descriptor governing `dir`, if one exists.
    #[must_use]
    pub fn toc_path(&self, dir: &str) -> Option<String> {
        let dir = normalize(dir);
        TOC_EXTENSIONS
            .iter()
            .map(|ext| format!("{dir}/{TOC_FILE_STEM}.{ext}"))
            .find(|path| self.tocs.contains_key(path))
    }

    /// Parsed descriptor for `dir`; the empty config when there is none.
    #[must_use]
    pub fn toc_for(&self, dir: Option<&str>) -> TocConfig {
        let raw = dir
            .and_then(|dir| self.toc_path(dir))
            .and_then(|path| self.tocs.get(&path));
        parse_toc_config(raw)
    }
}

/// Incremental builder for [`ContentStore`].
#[derive(Debug, Default)]
pub struct ContentStoreBuilder {
    documents: Vec<Document>,
    tocs: Vec<(String, Value)>,
}

impl ContentStoreBuilder {
    /// Add a document.
    #[must_use]
    pub fn document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add an untitled document with an empty body.
    #[must_use]
    pub fn page(self, path: &str) -> Self {
        self.document(Document::new(path, ""))
    }

    /// Add a raw TOC descriptor by its file path (e.g. `/docs/guide/_toc.yaml`).
    #[must_use]
    pub fn toc(mut self, path: impl Into<String>, raw: Value) -> Self {
        self.tocs.push((path.into(), raw));
        self
    }

    /// Build the store.
    #[must_use]
    pub fn build(self) -> ContentStore {
        ContentStore::new(self.documents, self.tocs)
    }
}
