//! Filesystem content discovery for starfu.
//!
//! [`FsLoader`] walks every configured section root and builds the
//! [`ContentStore`] the routing core works on:
//!
//! - `*.md` / `*.mdx` files become documents, titled from front matter
//! - `_toc.yaml` / `_toc.json` files become raw TOC descriptors
//!
//! Document keys are `<section root>/<relative path>`, matching the roots
//! the branches were configured with. Malformed descriptors and missing
//! roots are logged and skipped.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use starfu_config::Config;
//! use starfu_docs::DocsContext;
//! use starfu_storage_fs::FsLoader;
//!
//! let config = Config::load(None, None)?;
//! let store = FsLoader::new(&config).load()?;
//! let context = DocsContext::from_config(&config, store);
//! # Ok(())
//! # }
//! ```

mod front_matter;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use starfu_config::Config;
use starfu_docs::{ContentStore, Document};

use crate::front_matter::parse_front_matter;
use crate::scanner::{FileKind, FoundFile, Scanner};

/// Error returned when loading content from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A directory or file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Loads documents and TOC descriptors from the filesystem.
///
/// Section roots are resolved against the configuration's project directory.
#[derive(Debug, Clone, Copy)]
pub struct FsLoader<'a> {
    config: &'a Config,
}

impl<'a> FsLoader<'a> {
    /// Create a loader for the branches of `config`.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Walk every branch root and build the content store.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if an existing directory or file cannot be read.
    pub fn load(&self) -> Result<ContentStore, LoadError> {
        let mut documents = Vec::new();
        let mut tocs = Vec::new();

        for branch in &self.config.branches {
            let dir = self.config.branch_dir(branch);
            if !dir.is_dir() {
                tracing::warn!(section = %branch.id, path = %dir.display(), "Section root not found, skipping");
                continue;
            }

            let found = Scanner::new(dir).scan()?;
            tracing::debug!(section = %branch.id, files = found.len(), "Scanned section root");

            for file in found {
                let key = format!("{}/{}", branch.root, file.relative);
                match file.kind {
                    FileKind::Content => documents.push(load_document(&key, &file)?),
                    FileKind::Toc => {
                        if let Some(raw) = load_toc(&file.path)? {
                            tocs.push((key, raw));
                        }
                    }
                }
            }
        }

        tracing::info!(
            documents = documents.len(),
            descriptors = tocs.len(),
            "Loaded content"
        );
        Ok(ContentStore::new(documents, tocs))
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_document(key: &str, file: &FoundFile) -> Result<Document, LoadError> {
    let body = read(&file.path)?;
    let front_matter = parse_front_matter(&body);
    let document = Document::new(key, body);
    Ok(match front_matter.title {
        Some(title) => document.with_title(title),
        None => document,
    })
}

/// Parse a descriptor file into a loose value; `None` if it is malformed.
fn load_toc(path: &Path) -> Result<Option<Value>, LoadError> {
    let content = read(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let parsed = if is_json {
        serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string())
    };

    match parsed {
        Ok(raw) => Ok(Some(raw)),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Malformed TOC descriptor, ignoring it");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use starfu_docs::{DocsContext, NavLink, TocEntry};

    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn config_for(project_dir: &Path, root: &str) -> Config {
        Config::from_toml(&format!("[[sections]]\nroot = \"{root}\"\n"), project_dir).unwrap()
    }

    #[test]
    fn test_load_keys_documents_by_section_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/tutorial/intro.md", "# Intro");
        write(temp_dir.path(), "docs/tutorial/basics/setup.mdx", "# Setup");
        let config = config_for(temp_dir.path(), "docs/tutorial");

        let store = FsLoader::new(&config).load().unwrap();

        let paths: Vec<_> = store.all_paths().collect();
        assert_eq!(
            paths,
            vec!["/docs/tutorial/basics/setup.mdx", "/docs/tutorial/intro.md"]
        );
    }

    #[test]
    fn test_load_resolves_parent_relative_roots() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/guide/a.md", "# A");
        let project_dir = temp_dir.path().join("site");
        fs::create_dir(&project_dir).unwrap();
        let config = config_for(&project_dir, "../docs/guide");

        let store = FsLoader::new(&config).load().unwrap();

        assert_eq!(store.all_paths().collect::<Vec<_>>(), vec!["../docs/guide/a.md"]);
    }

    #[test]
    fn test_load_reads_front_matter_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "docs/guide/start.md",
            "---\ntitle: Getting Started\n---\n# Start",
        );
        write(temp_dir.path(), "docs/guide/plain.md", "# Plain");
        let config = config_for(temp_dir.path(), "docs/guide");

        let store = FsLoader::new(&config).load().unwrap();

        let titles: Vec<_> = store
            .documents()
            .iter()
            .map(|d| d.title.as_deref())
            .collect();
        assert_eq!(titles, vec![None, Some("Getting Started")]);
        assert!(store.documents()[0].body.starts_with("# Plain"));
    }

    #[test]
    fn test_load_parses_yaml_and_json_descriptors() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/guide/_toc.yaml", "- path: intro\n  label: Welcome\n");
        write(temp_dir.path(), "docs/guide/g/_toc.json", r#"["y", "x"]"#);
        let config = config_for(temp_dir.path(), "docs/guide");

        let store = FsLoader::new(&config).load().unwrap();

        let root = store.toc_for(Some("/docs/guide"));
        assert_eq!(
            root.ordered,
            vec![TocEntry {
                path: "intro".to_owned(),
                label: Some("Welcome".to_owned()),
                header: None,
            }]
        );
        assert_eq!(root.label("intro"), Some("Welcome"));
        assert_eq!(
            store.toc_for(Some("/docs/guide/g")).ordered,
            vec![TocEntry::new("y"), TocEntry::new("x")]
        );
    }

    #[test]
    fn test_yaml_numeric_slugs_stay_in_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/news/intro.md", "# Intro");
        write(temp_dir.path(), "docs/news/2024.md", "# 2024");
        write(temp_dir.path(), "docs/news/2023.md", "# 2023");
        write(
            temp_dir.path(),
            "docs/news/_toc.yaml",
            "- intro\n- 2024\n- path: 2023\n  label: Last year\n",
        );
        let config = config_for(temp_dir.path(), "docs/news");
        let store = FsLoader::new(&config).load().unwrap();

        let context = DocsContext::from_config(&config, store);
        let nav = context.section("news").unwrap().nav();

        let dirs: Vec<_> = nav.iter().map(|n| n.dir.as_str()).collect();
        assert_eq!(dirs, vec!["intro", "2024", "2023"]);
        assert_eq!(nav[2].label, "Last year");
    }

    #[test]
    fn test_load_skips_malformed_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/guide/_toc.json", "[not json");
        write(temp_dir.path(), "docs/guide/a.md", "# A");
        let config = config_for(temp_dir.path(), "docs/guide");

        let store = FsLoader::new(&config).load().unwrap();

        assert_eq!(store.toc_path("/docs/guide"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_missing_root_yields_no_documents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = config_for(temp_dir.path(), "docs/missing");

        let store = FsLoader::new(&config).load().unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_loaded_store_drives_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "docs/tutorial/a.md", "# A");
        write(temp_dir.path(), "docs/tutorial/g/x.md", "---\ntitle: Ex\n---\n");
        write(temp_dir.path(), "docs/tutorial/g/y.md", "# Y");
        let config = config_for(temp_dir.path(), "docs/tutorial");
        let store = FsLoader::new(&config).load().unwrap();

        let context = DocsContext::from_config(&config, store);
        let nav = context.section("tutorial").unwrap().nav();

        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].href.as_deref(), Some("/tutorial/a"));
        assert_eq!(
            nav[1].items,
            vec![
                NavLink::new("/tutorial/g/x", "Ex"),
                NavLink::new("/tutorial/g/y", "y"),
            ]
        );
    }
}
