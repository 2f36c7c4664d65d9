//! One documentation section bound to the content store.

use starfu_config::Branch;

use crate::nav::{NavLink, NavNode, compose};
use crate::path::{is_index_document, normalize, route_within, to_relative};
use crate::resolve::{Resolver, RouteResolution, resolve_or_next};
use crate::store::{ContentStore, Document};

/// A configured branch viewed through the content store.
///
/// Sections are cheap views; every query recomputes from the immutable
/// store, so they can be created per request.
#[derive(Clone, Debug)]
pub struct Section<'a> {
    branch: &'a Branch,
    store: &'a ContentStore,
    base_prefix: String,
    base: String,
}

impl<'a> Section<'a> {
    /// Bind `branch` to `store` under the site `base_path`.
    pub(crate) fn new(branch: &'a Branch, store: &'a ContentStore, base_path: &str) -> Self {
        let base_prefix = base_path.strip_suffix('/').unwrap_or(base_path).to_owned();
        let base = format!("{base_prefix}/{}", branch.id);
        Self {
            branch,
            store,
            base_prefix,
            base,
        }
    }

    /// Section id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.branch.id
    }

    /// Resolved branch configuration.
    #[must_use]
    pub fn branch(&self) -> &'a Branch {
        self.branch
    }

    /// Public route prefix of the section, e.g. `/guide/tutorial`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Filesystem root of the section content.
    #[must_use]
    pub fn content_root(&self) -> &'a str {
        &self.branch.root
    }

    /// Documents under the section root, index documents included.
    pub fn documents(&self) -> impl Iterator<Item = &'a Document> + use<'a> {
        self.store.documents_under(self.content_root())
    }

    /// Public route of a document in this section.
    #[must_use]
    pub fn route_of(&self, document: &Document) -> String {
        format!(
            "{}{}",
            self.base_prefix,
            route_within(self.branch, &document.path)
        )
    }

    /// Navigable entries in path order. Index documents are left out.
    #[must_use]
    pub fn entries(&self) -> Vec<NavLink> {
        self.documents()
            .filter(|doc| !is_index_document(&doc.path))
            .map(|doc| {
                let url = self.route_of(doc);
                let title = doc
                    .title
                    .clone()
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| last_segment(to_relative(&url, &self.base)).to_owned());
                NavLink { url, title }
            })
            .collect()
    }

    /// Route lookup over every document in the section.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self)
    }

    /// Navigation tree of the section.
    #[must_use]
    pub fn nav(&self) -> Vec<NavNode> {
        let root = normalize(self.content_root());
        let root_toc = self.store.toc_for(Some(root));
        compose(&self.entries(), &self.base, &root_toc, |dir| {
            self.store.toc_for(Some(&format!("{root}/{dir}")))
        })
    }

    /// Resolve `segment`, redirecting to a nearby page when it does not exist.
    #[must_use]
    pub fn resolve_or_next(&self, segment: &str) -> RouteResolution<'a> {
        resolve_or_next(self, segment)
    }
}

fn last_segment(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn store() -> ContentStore {
        ContentStore::builder()
            .page("/docs/tutorial/index.md")
            .page("/docs/tutorial/a.md")
            .page("/docs/tutorial/g/index.md")
            .page("/docs/tutorial/g/y.md")
            .document(Document::new("/docs/tutorial/g/x.mdx", "").with_title("Ex"))
            .page("/docs/other/z.md")
            .build()
    }

    #[test]
    fn test_base_joins_base_path_and_id() {
        let store = store();
        let branch = Branch::from_root("/docs/tutorial");

        assert_eq!(Section::new(&branch, &store, "/").base(), "/tutorial");
        assert_eq!(
            Section::new(&branch, &store, "/guide").base(),
            "/guide/tutorial"
        );
        assert_eq!(
            Section::new(&branch, &store, "/guide/").base(),
            "/guide/tutorial"
        );
    }

    #[test]
    fn test_section_exposes_its_branch() {
        let store = store();
        let branch = Branch::from_root("../docs/other/");
        let section = Section::new(&branch, &store, "/");

        assert_eq!(section.id(), "other");
        assert_eq!(section.content_root(), "../docs/other");
        assert_eq!(section.branch().href, "/other");
    }

    #[test]
    fn test_entries_skip_index_documents_and_other_sections() {
        let store = store();
        let branch = Branch::from_root("/docs/tutorial");
        let section = Section::new(&branch, &store, "/");

        assert_eq!(
            section.entries(),
            vec![
                NavLink::new("/tutorial/a", "a"),
                NavLink::new("/tutorial/g/x", "Ex"),
                NavLink::new("/tutorial/g/y", "y"),
            ]
        );
    }

    #[test]
    fn test_entries_prefix_base_path() {
        let store = store();
        let branch = Branch::from_root("/docs/other");
        let section = Section::new(&branch, &store, "/guide");

        assert_eq!(section.entries(), vec![NavLink::new("/guide/other/z", "z")]);
    }

    #[test]
    fn test_route_of_index_document_keeps_directory() {
        let store = store();
        let branch = Branch::from_root("/docs/tutorial");
        let section = Section::new(&branch, &store, "/");

        assert_eq!(
            section.route_of(&Document::new("/docs/tutorial/g/index.md", "")),
            "/tutorial/g/"
        );
    }

    #[test]
    fn test_nav_without_descriptors_surfaces_everything() {
        let store = ContentStore::builder()
            .page("/docs/tutorial/a.md")
            .page("/docs/tutorial/g/x.md")
            .page("/docs/tutorial/g/y.md")
            .build();
        let branch = Branch::from_root("/docs/tutorial");
        let section = Section::new(&branch, &store, "/");

        let nav = section.nav();

        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].dir, "a");
        assert_eq!(nav[0].href.as_deref(), Some("/tutorial/a"));
        assert_eq!(nav[1].dir, "g");
        assert_eq!(
            nav[1].items,
            vec![
                NavLink::new("/tutorial/g/x", "x"),
                NavLink::new("/tutorial/g/y", "y"),
            ]
        );
    }

    #[test]
    fn test_nav_reads_root_and_group_descriptors() {
        let store = ContentStore::builder()
            .page("/docs/tutorial/a.md")
            .page("/docs/tutorial/g/x.md")
            .page("/docs/tutorial/g/y.md")
            .toc(
                "/docs/tutorial/_toc.yaml",
                json!([{"path": "g/", "label": "Group", "header": "Start"}, "a"]),
            )
            .toc("/docs/tutorial/g/_toc.json", json!(["y", "x"]))
            .build();
        let branch = Branch::from_root("/docs/tutorial");
        let section = Section::new(&branch, &store, "/");

        let nav = section.nav();

        assert_eq!(nav[0].label, "Group");
        assert_eq!(nav[0].header.as_deref(), Some("Start"));
        assert_eq!(
            nav[0].items,
            vec![
                NavLink::new("/tutorial/g/y", "y"),
                NavLink::new("/tutorial/g/x", "x"),
            ]
        );
        assert_eq!(nav[1].dir, "a");
    }
}
