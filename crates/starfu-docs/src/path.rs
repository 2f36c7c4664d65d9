//! Route and slug string utilities.
//!
//! Filesystem paths use forward slashes throughout. A slug ending with `/`
//! denotes a group (directory); anything else is an item (document).

use std::borrow::Cow;

use starfu_config::Branch;

/// Extensions recognized as content documents.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Strip a single trailing slash.
#[must_use]
pub fn normalize(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Strip all leading and trailing slashes.
#[must_use]
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Whether a slug denotes a group.
#[must_use]
pub fn is_group(slug: &str) -> bool {
    slug.ends_with('/')
}

/// Translate backslashes to forward slashes.
#[must_use]
pub fn to_forward_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Normalize a TOC slug, keeping its group/item nature.
///
/// Repeated slashes collapse, leading `./` is stripped, groups end with
/// exactly one `/` and items end with none. The result is a fixed point.
#[must_use]
pub fn normalize_slug(slug: &str) -> String {
    let collapsed = collapse_slashes(slug);
    let mut rest = collapsed.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }

    if is_group(slug) {
        format!("{}/", normalize(rest))
    } else {
        normalize(rest).to_owned()
    }
}

fn collapse_slashes(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Whether `fs_path` lies strictly under the directory `root`.
#[must_use]
pub fn is_under(fs_path: &str, root: &str) -> bool {
    fs_path
        .strip_prefix(normalize(root))
        .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
}

/// Whether `fs_path` is a directory index document (`…/index.md`).
#[must_use]
pub fn is_index_document(fs_path: &str) -> bool {
    CONTENT_EXTENSIONS
        .iter()
        .any(|ext| fs_path.ends_with(&format!("/index.{ext}")))
}

/// Convert a filesystem path to its canonical route.
///
/// Returns `None` when no branch root contains the path; such documents are
/// excluded from routing.
///
/// ```
/// use starfu_config::Branch;
/// use starfu_docs::path::fs_to_route;
///
/// let branches = [Branch::from_root("/docs/tutorial")];
/// assert_eq!(
///     fs_to_route("/docs/tutorial/basics/setup.md", &branches).as_deref(),
///     Some("/tutorial/basics/setup")
/// );
/// assert_eq!(fs_to_route("/elsewhere/a.md", &branches), None);
/// ```
#[must_use]
pub fn fs_to_route(fs_path: &str, branches: &[Branch]) -> Option<String> {
    let fs_path = to_forward_slashes(fs_path);
    let branch = branches.iter().find(|b| is_under(&fs_path, &b.root))?;
    Some(route_within(branch, &fs_path))
}

/// Route of a document known to live under `branch`.
///
/// Index documents map to their directory route, which keeps a trailing
/// slash (`/tutorial/basics/`); the section index maps to `/tutorial/`.
#[must_use]
pub fn route_within(branch: &Branch, fs_path: &str) -> String {
    let rel = fs_path
        .strip_prefix(normalize(&branch.root))
        .unwrap_or(fs_path)
        .trim_start_matches('/');
    let rel = strip_index(rel).unwrap_or_else(|| strip_extension(rel));
    format!("/{}/{rel}", branch.id)
}

fn strip_index(rel: &str) -> Option<&str> {
    CONTENT_EXTENSIONS.iter().find_map(|ext| {
        let name = format!("index.{ext}");
        if rel == name {
            return Some("");
        }
        rel.strip_suffix(name.as_str())
            .filter(|dir| dir.ends_with('/'))
    })
}

fn strip_extension(rel: &str) -> &str {
    CONTENT_EXTENSIONS
        .iter()
        .find_map(|ext| rel.strip_suffix(&format!(".{ext}")))
        .unwrap_or(rel)
}

/// Remove a literal `base + "/"` prefix; unrelated URLs are returned unchanged.
#[must_use]
pub fn to_relative<'a>(url: &'a str, base: &str) -> &'a str {
    url.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(url)
}

/// Non-empty segments of `url` relative to `base`.
#[must_use]
pub fn get_parts<'a>(url: &'a str, base: &str) -> Vec<&'a str> {
    to_relative(url, base)
        .split('/')
        .filter(|part| !part.is_empty())
        .collect()
}
