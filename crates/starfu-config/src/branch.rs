//! Documentation branches (sections) and the path conventions that derive them.
//!
//! A branch is one top-level documentation area such as `tutorial` or
//! `cocktails`. Only `root` is required in configuration; everything else is
//! derived from it:
//!
//! - `id`: last path component of `root`
//! - `title`: the id
//! - `subtitle`: empty
//! - `href`: `/<id>` joined onto the base path (see [`resolve_branch_href`])

use serde::{Deserialize, Serialize};

/// Raw `[[sections]]` entry as written in `starfu.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SectionConfig {
    /// Filesystem root of the section content.
    pub root: String,
    /// Stable short name. Defaults to the last component of `root`.
    pub id: Option<String>,
    /// Display title. Defaults to the id.
    pub title: Option<String>,
    /// Display subtitle.
    pub subtitle: Option<String>,
    /// Public URL, absolute or relative to the base path.
    pub href: Option<String>,
}

/// A configured documentation section with every field resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Stable short name, unique across branches.
    pub id: String,
    /// Normalized filesystem root (no trailing slash).
    pub root: String,
    /// Display title.
    pub title: String,
    /// Display subtitle (may be empty).
    pub subtitle: String,
    /// Public-facing URL.
    pub href: String,
}

impl Branch {
    /// Create a branch from its root alone, relative to the site root `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use starfu_config::Branch;
    ///
    /// let branch = Branch::from_root("docs/tutorial/");
    /// assert_eq!(branch.id, "tutorial");
    /// assert_eq!(branch.root, "/docs/tutorial");
    /// assert_eq!(branch.href, "/tutorial");
    /// ```
    #[must_use]
    pub fn from_root(root: &str) -> Self {
        Self::resolve(
            &SectionConfig {
                root: root.to_owned(),
                ..SectionConfig::default()
            },
            None,
        )
    }

    /// Resolve a raw section entry against the configured base path.
    #[must_use]
    pub fn resolve(section: &SectionConfig, base_path: Option<&str>) -> Self {
        let root = normalize_root(&section.root);
        let id = section
            .id
            .clone()
            .unwrap_or_else(|| id_from_root(&root).to_owned());
        let href = resolve_branch_href(&id, section.href.as_deref(), base_path);

        Self {
            title: section.title.clone().unwrap_or_else(|| id.clone()),
            subtitle: section.subtitle.clone().unwrap_or_default(),
            id,
            root,
            href,
        }
    }

    /// Fallback used when no sections are configured.
    #[must_use]
    pub(crate) fn fallback(base_path: Option<&str>) -> Self {
        Self::resolve(
            &SectionConfig {
                root: "/docs".to_owned(),
                title: Some("Docs".to_owned()),
                subtitle: Some(String::new()),
                href: Some("/docs".to_owned()),
                ..SectionConfig::default()
            },
            base_path,
        )
    }
}

/// Last path component of a root, e.g. `tutorial` for `../docs/tutorial`.
fn id_from_root(root: &str) -> &str {
    root.rsplit('/').next().unwrap_or(root)
}

/// Normalize the public base path.
///
/// Missing input means `/`. A trailing slash is removed, but the root itself
/// stays `/`.
///
/// ```
/// use starfu_config::normalize_base_path;
///
/// assert_eq!(normalize_base_path(None), "/");
/// assert_eq!(normalize_base_path(Some("/repo/")), "/repo");
/// assert_eq!(normalize_base_path(Some("/")), "/");
/// ```
#[must_use]
pub fn normalize_base_path(raw: Option<&str>) -> String {
    let base = raw.unwrap_or("/");
    let trimmed = base.strip_suffix('/').unwrap_or(base);
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Normalize a section root path.
///
/// - Backslashes become forward slashes
/// - Leading `./` is stripped
/// - Trailing slashes are removed
/// - A leading `/` is added unless the path is relative to a parent (`../`)
#[must_use]
pub fn normalize_root(root: &str) -> String {
    let forward = root.replace('\\', "/");
    let mut path = forward.as_str();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    let path = path.trim_end_matches('/');

    if path == ".." || path.starts_with("../") || path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Resolve the public href of a branch.
///
/// Scheme-qualified hrefs (`https://…`, `mailto:…`) are kept as-is, as are
/// hrefs that already start with the base path. Anything else is joined onto
/// the base path with exactly one slash.
#[must_use]
pub fn resolve_branch_href(id: &str, href: Option<&str>, base_path: Option<&str>) -> String {
    let source = href.map_or_else(|| format!("/{id}"), str::to_owned);

    if has_scheme(&source) {
        return source;
    }

    let normalized_base = normalize_base_path(base_path);
    let base = if normalized_base == "/" {
        ""
    } else {
        normalized_base.as_str()
    };

    if !base.is_empty() && source.starts_with(base) {
        return source;
    }

    let joined = if source.starts_with('/') {
        format!("{base}{source}")
    } else {
        format!("{base}/{source}")
    };
    if joined.is_empty() {
        "/".to_owned()
    } else {
        joined
    }
}

/// Whether `href` starts with a URI scheme such as `https:` or `mailto:`.
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
