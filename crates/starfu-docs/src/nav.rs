//! Navigation tree composition.
//!
//! A section's navigation has at most two levels. The section root's TOC
//! picks and orders the top-level entries: documents (`intro`) and groups
//! (`basics/`). Each group's own TOC, looked up in that directory, orders the
//! group's items. Authored labels and headers win over derived ones.
//!
//! A directory without an authored order is not empty: its discovered
//! entries are listed in discovery (path) order instead.

use std::collections::HashMap;

use serde::Serialize;

use crate::path::get_parts;
use crate::toc::TocConfig;

/// Characters after which [`capitalize`] starts a new word.
const WORD_SEPARATORS: &[char] = &['-', '_', ' ', '/'];

/// A link to one addressable document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Public URL.
    pub url: String,
    /// Display title.
    pub title: String,
}

impl NavLink {
    /// Create a link.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// One top-level navigation node: a group of links or a single leaf link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display label.
    pub label: String,
    /// Ordered links; empty for a leaf.
    pub items: Vec<NavLink>,
    /// Directory name (groups) or document slug (leaves).
    pub dir: String,
    /// Descriptive text shown above the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Link target; set for leaves only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NavNode {
    /// True for a leaf node (a single document link).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.href.is_some() && self.items.is_empty()
    }

    /// URL of the node's first item, or its own href.
    #[must_use]
    pub fn first_url(&self) -> Option<&str> {
        self.items
            .first()
            .map(|item| item.url.as_str())
            .or(self.href.as_deref())
    }
}

/// Turn a slug into a label: uppercase the first letter and every letter
/// that follows a separator. Separators are kept.
///
/// ```
/// use starfu_docs::capitalize;
///
/// assert_eq!(capitalize("getting-started"), "Getting-Started");
/// assert_eq!(capitalize("api"), "Api");
/// ```
#[must_use]
pub fn capitalize(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut word_start = true;
    for c in slug.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = WORD_SEPARATORS.contains(&c);
    }
    out
}

/// Section entries split into top-level documents and grouped documents.
struct EntryIndex<'e> {
    top_docs: HashMap<&'e str, &'e NavLink>,
    groups: HashMap<&'e str, Vec<(&'e str, &'e NavLink)>>,
    /// Top-level slugs in first-seen order; groups carry a trailing `/`.
    discovered: Vec<String>,
}

impl<'e> EntryIndex<'e> {
    fn new(entries: &'e [NavLink], base: &str) -> Self {
        let mut top_docs = HashMap::new();
        let mut groups: HashMap<&str, Vec<(&str, &NavLink)>> = HashMap::new();
        let mut discovered = Vec::new();

        for entry in entries {
            match get_parts(&entry.url, base).as_slice() {
                [slug] => {
                    if top_docs.insert(*slug, entry).is_none() {
                        discovered.push((*slug).to_owned());
                    }
                }
                [group, slug] => {
                    let items = groups.entry(*group).or_insert_with(|| {
                        discovered.push(format!("{group}/"));
                        Vec::new()
                    });
                    match items.iter_mut().find(|(existing, _)| existing == slug) {
                        Some(item) => item.1 = entry,
                        None => items.push((*slug, entry)),
                    }
                }
                _ => tracing::debug!(
                    url = %entry.url,
                    "Route is not one or two levels below the section, leaving it out of navigation"
                ),
            }
        }

        Self {
            top_docs,
            groups,
            discovered,
        }
    }
}

/// Compose the navigation tree for one section.
///
/// * `entries` - discovered `{url, title}` entries in discovery order
/// * `base` - public section base the entry URLs are relative to
/// * `root_toc` - descriptor of the section content root
/// * `group_toc` - descriptor lookup for a group directory name
pub(crate) fn compose(
    entries: &[NavLink],
    base: &str,
    root_toc: &TocConfig,
    group_toc: impl Fn(&str) -> TocConfig,
) -> Vec<NavNode> {
    let index = EntryIndex::new(entries, base);

    let order: Vec<&str> = if root_toc.is_empty() {
        index.discovered.iter().map(String::as_str).collect()
    } else {
        root_toc.ordered.iter().map(|e| e.path.as_str()).collect()
    };

    order
        .into_iter()
        .filter(|path| !path.is_empty())
        .filter_map(|path| match path.strip_suffix('/') {
            Some(dir) => build_group(&index, root_toc, dir, &group_toc(dir)),
            None => build_doc(&index, root_toc, path),
        })
        .collect()
}

fn build_group(
    index: &EntryIndex<'_>,
    root_toc: &TocConfig,
    dir: &str,
    local_toc: &TocConfig,
) -> Option<NavNode> {
    let group_key = format!("{dir}/");
    let discovered = index.groups.get(dir)?;

    let link = |slug: &str, entry: &NavLink| {
        NavLink::new(
            entry.url.clone(),
            label_for(local_toc.label(slug), &entry.title, slug),
        )
    };

    let items: Vec<NavLink> = if local_toc.is_empty() {
        discovered
            .iter()
            .map(|(slug, entry)| link(*slug, *entry))
            .collect()
    } else {
        local_toc
            .ordered
            .iter()
            .map(|e| e.path.strip_suffix('/').unwrap_or(&e.path))
            .filter(|slug| !slug.is_empty())
            .filter_map(|slug| {
                discovered
                    .iter()
                    .find(|(candidate, _)| *candidate == slug)
                    .map(|(_, entry)| link(slug, *entry))
            })
            .collect()
    };

    if items.is_empty() {
        tracing::debug!(dir, "Group has no navigable items, omitting it");
        return None;
    }

    Some(NavNode {
        label: root_toc
            .label(&group_key)
            .map_or_else(|| capitalize(dir), str::to_owned),
        items,
        dir: dir.to_owned(),
        header: root_toc.header(&group_key).map(str::to_owned),
        href: None,
    })
}

fn build_doc(index: &EntryIndex<'_>, root_toc: &TocConfig, slug: &str) -> Option<NavNode> {
    let entry = index.top_docs.get(slug)?;

    Some(NavNode {
        label: label_for(root_toc.label(slug), &entry.title, slug),
        items: Vec::new(),
        dir: slug.to_owned(),
        header: root_toc.header(slug).map(str::to_owned),
        href: Some(entry.url.clone()),
    })
}

/// Authored label, else the document title, else the capitalized slug.
fn label_for(authored: Option<&str>, title: &str, slug: &str) -> String {
    authored
        .or(Some(title).filter(|t| !t.is_empty()))
        .map_or_else(|| capitalize(slug), str::to_owned)
}
