//! Route resolution with redirect fallback.

use std::collections::HashMap;

use serde::Serialize;

use crate::nav::NavNode;
use crate::path::{normalize, trim_slashes};
use crate::section::Section;
use crate::store::Document;

/// Lookup from normalized public route to document for one section.
#[derive(Debug)]
pub struct Resolver<'a> {
    base: String,
    routes: HashMap<String, &'a Document>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(section: &Section<'a>) -> Self {
        let routes = section
            .documents()
            .map(|doc| (normalize(&section.route_of(doc)).to_owned(), doc))
            .collect();
        Self {
            base: normalize(section.base()).to_owned(),
            routes,
        }
    }

    /// Document addressed by `segment` relative to the section base.
    ///
    /// An empty segment addresses the section root.
    #[must_use]
    pub fn resolve(&self, segment: &str) -> Option<&'a Document> {
        let segment = trim_slashes(segment);
        if segment.is_empty() {
            return self.routes.get(&self.base).copied();
        }
        self.routes.get(&format!("{}/{segment}", self.base)).copied()
    }

    /// Number of addressable routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route is addressable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// What a requested segment resolved to.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome<'a> {
    /// The segment addresses a document.
    #[serde(rename = "ok")]
    Resolved {
        /// Requested segment.
        segment: String,
        /// Matching document.
        document: &'a Document,
    },
    /// The segment is unknown but a nearby page exists.
    Redirect {
        /// Target URL.
        url: String,
    },
    /// Nothing sensible to show.
    NotFound,
}

/// Resolution outcome together with the section navigation.
#[derive(Debug, Serialize)]
pub struct RouteResolution<'a> {
    /// Outcome of the lookup.
    #[serde(flatten)]
    pub outcome: Outcome<'a>,
    /// Section navigation, built regardless of the outcome.
    pub nav: Vec<NavNode>,
}

/// Resolve `segment` within `section`.
///
/// Exact matches resolve. Otherwise the request is redirected to the first
/// page of the navigation group named by the segment's first part, or to
/// the first page of the section when the segment is empty.
#[must_use]
pub fn resolve_or_next<'a>(section: &Section<'a>, segment: &str) -> RouteResolution<'a> {
    let nav = section.nav();

    if let Some(document) = section.resolver().resolve(segment) {
        return RouteResolution {
            outcome: Outcome::Resolved {
                segment: segment.to_owned(),
                document,
            },
            nav,
        };
    }

    let target = match segment.split('/').find(|part| !part.is_empty()) {
        None => nav.first().and_then(NavNode::first_url),
        Some(dir) => nav
            .iter()
            .find(|node| node.dir == dir)
            .and_then(NavNode::first_url),
    }
    .map(str::to_owned);

    let outcome = match target {
        Some(url) => {
            tracing::debug!(section = section.id(), segment, %url, "Redirecting unresolved route");
            Outcome::Redirect { url }
        }
        None => {
            tracing::debug!(section = section.id(), segment, "Route not found");
            Outcome::NotFound
        }
    };

    RouteResolution { outcome, nav }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use starfu_config::Branch;

    use super::*;
    use crate::store::ContentStore;

    fn branch() -> Branch {
        Branch::from_root("/docs/tutorial")
    }

    fn pages() -> ContentStore {
        ContentStore::builder()
            .page("/docs/tutorial/intro.md")
            .page("/docs/tutorial/basics/setup.md")
            .page("/docs/tutorial/basics/usage.md")
            .toc("/docs/tutorial/_toc.yaml", json!(["basics/", "intro"]))
            .build()
    }

    fn redirect_url<'r>(resolution: &'r RouteResolution<'_>) -> Option<&'r str> {
        match &resolution.outcome {
            Outcome::Redirect { url } => Some(url.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_resolver_matches_exact_routes() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");
        let resolver = section.resolver();

        assert_eq!(resolver.len(), 3);
        assert_eq!(
            resolver.resolve("basics/setup").map(|d| d.path.as_str()),
            Some("/docs/tutorial/basics/setup.md")
        );
        assert_eq!(
            resolver.resolve("/intro/").map(|d| d.path.as_str()),
            Some("/docs/tutorial/intro.md")
        );
        assert!(resolver.resolve("basics").is_none());
    }

    #[test]
    fn test_empty_segment_redirects_to_first_item() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "");

        assert_eq!(redirect_url(&resolution), Some("/tutorial/basics/setup"));
        assert_eq!(resolution.nav.len(), 2);
    }

    #[test]
    fn test_empty_segment_resolves_addressable_root() {
        let store = ContentStore::builder()
            .page("/docs/tutorial/index.md")
            .page("/docs/tutorial/intro.md")
            .build();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "");

        match resolution.outcome {
            Outcome::Resolved { segment, document } => {
                assert_eq!(segment, "");
                assert_eq!(document.path, "/docs/tutorial/index.md");
            }
            other => panic!("expected resolved outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_group_index_is_addressable() {
        let store = ContentStore::builder()
            .page("/docs/tutorial/basics/index.md")
            .page("/docs/tutorial/basics/setup.md")
            .build();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        assert!(matches!(
            resolve_or_next(&section, "basics").outcome,
            Outcome::Resolved { .. }
        ));
    }

    #[test]
    fn test_unknown_page_in_group_redirects_to_group_start() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "basics/missing");

        assert_eq!(redirect_url(&resolution), Some("/tutorial/basics/setup"));
    }

    #[test]
    fn test_unknown_leaf_prefix_redirects_to_leaf() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "intro/extra");

        assert_eq!(redirect_url(&resolution), Some("/tutorial/intro"));
    }

    #[test]
    fn test_unknown_top_level_is_not_found() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "nowhere/at-all");

        assert!(matches!(resolution.outcome, Outcome::NotFound));
        assert_eq!(resolution.nav.len(), 2);
    }

    #[test]
    fn test_empty_section_is_not_found() {
        let store = ContentStore::default();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let resolution = resolve_or_next(&section, "");

        assert!(matches!(resolution.outcome, Outcome::NotFound));
        assert!(resolution.nav.is_empty());
    }

    #[test]
    fn test_resolution_serializes_with_kind_tag() {
        let store = pages();
        let branch = branch();
        let section = Section::new(&branch, &store, "/");

        let redirect = serde_json::to_value(resolve_or_next(&section, "")).unwrap();
        let not_found = serde_json::to_value(resolve_or_next(&section, "zzz")).unwrap();
        let ok = serde_json::to_value(resolve_or_next(&section, "intro")).unwrap();

        assert_eq!(redirect["kind"], "redirect");
        assert_eq!(redirect["url"], "/tutorial/basics/setup");
        assert_eq!(not_found["kind"], "not_found");
        assert_eq!(ok["kind"], "ok");
        assert_eq!(ok["document"]["path"], "/docs/tutorial/intro.md");
        assert!(ok["nav"].is_array());
    }
}
