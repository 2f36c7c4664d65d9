//! Immutable docs context built once at startup.

use serde::Serialize;
use starfu_config::{Branch, Config, normalize_base_path};

use crate::error::DocsError;
use crate::path::{fs_to_route, trim_slashes};
use crate::section::Section;
use crate::store::{ContentStore, Document};

/// Route parameters of one statically generated page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Section id.
    pub section: String,
    /// Page path inside the section; `None` for the section landing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Resolved base path, branches and content, shared by every query.
///
/// The context is never mutated after construction. Independent contexts
/// can coexist in one process.
#[derive(Debug)]
pub struct DocsContext {
    base_path: String,
    branches: Vec<Branch>,
    store: ContentStore,
}

impl DocsContext {
    /// Create a context from already resolved branches.
    #[must_use]
    pub fn new(base_path: &str, branches: Vec<Branch>, store: ContentStore) -> Self {
        Self {
            base_path: normalize_base_path(Some(base_path)),
            branches,
            store,
        }
    }

    /// Create a context from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config, store: ContentStore) -> Self {
        Self::new(
            &config.base_path_resolved,
            config.branches.clone(),
            store,
        )
    }

    /// Normalized public base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Configured branches in configuration order.
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Branch with the given id. Surrounding slashes are ignored.
    #[must_use]
    pub fn branch(&self, id: &str) -> Option<&Branch> {
        let id = trim_slashes(id);
        self.branches.iter().find(|branch| branch.id == id)
    }

    /// Underlying content store.
    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Documents of one section; empty for an unknown id.
    #[must_use]
    pub fn documents_for_section(&self, id: &str) -> Vec<&Document> {
        self.branch(id)
            .map(|branch| self.store.documents_under(&branch.root).collect())
            .unwrap_or_default()
    }

    /// Section view under the configured base path.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SectionNotConfigured` for an unknown id.
    pub fn section(&self, id: &str) -> Result<Section<'_>, DocsError> {
        self.section_with_base(id, &self.base_path)
    }

    /// Section view under an explicit base path.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SectionNotConfigured` for an unknown id.
    pub fn section_with_base(&self, id: &str, base_path: &str) -> Result<Section<'_>, DocsError> {
        let branch = self
            .branch(id)
            .ok_or_else(|| DocsError::SectionNotConfigured(id.to_owned()))?;
        Ok(Section::new(branch, &self.store, base_path))
    }

    /// Every configured section, in configuration order.
    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.branches
            .iter()
            .map(|branch| Section::new(branch, &self.store, &self.base_path))
    }

    /// Parameters of every page to generate statically.
    ///
    /// One entry per document page, followed by one landing entry per
    /// section that has content, in first-seen order.
    #[must_use]
    pub fn page_params(&self) -> Vec<PageParams> {
        let mut params = Vec::new();
        let mut sections: Vec<String> = Vec::new();

        for path in self.store.all_paths() {
            let Some(route) = fs_to_route(path, &self.branches) else {
                continue;
            };
            let mut parts = route.split('/').filter(|part| !part.is_empty());
            let Some(section) = parts.next() else {
                continue;
            };
            if self.branch(section).is_none() {
                continue;
            }

            let page = parts.collect::<Vec<_>>().join("/");
            if !sections.iter().any(|seen| seen == section) {
                sections.push(section.to_owned());
            }
            if !page.is_empty() {
                params.push(PageParams {
                    section: section.to_owned(),
                    page: Some(page),
                });
            }
        }

        params.extend(
            sections
                .into_iter()
                .map(|section| PageParams { section, page: None }),
        );
        params
    }
}
