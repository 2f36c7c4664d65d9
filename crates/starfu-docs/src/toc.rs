//! Table-of-contents descriptor parsing.
//!
//! A descriptor (`_toc.yaml` / `_toc.json`) lists the entries of one
//! directory in presentation order:
//!
//! ```yaml
//! - intro
//! - path: basics/
//!   label: Getting Started
//!   header: Start here if you are new
//! - advanced
//! ```
//!
//! Descriptors are loosely typed. Anything that is not an array of strings
//! or `{path, label?, header?}` objects degrades to "no authored order"
//! instead of failing.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::path::normalize_slug;

/// One authored entry of a descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Normalized slug; groups end with `/`.
    pub path: String,
    /// Label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Header text shown above a group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl TocEntry {
    /// Create an entry without overrides.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
            header: None,
        }
    }
}

/// Parsed descriptor for one directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TocConfig {
    /// Entries in presentation order.
    pub ordered: Vec<TocEntry>,
    /// Label overrides keyed by normalized slug.
    pub alias: HashMap<String, String>,
    /// Header texts keyed by normalized slug.
    pub headers: HashMap<String, String>,
}

impl TocConfig {
    /// True when the descriptor defines no ordering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Non-empty label override for a slug.
    #[must_use]
    pub fn label(&self, slug: &str) -> Option<&str> {
        self.alias
            .get(slug)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Header text for a slug.
    #[must_use]
    pub fn header(&self, slug: &str) -> Option<&str> {
        self.headers.get(slug).map(String::as_str)
    }
}

/// Parse a raw descriptor into a [`TocConfig`].
///
/// `None`, `null` and non-array values yield the empty config. A top-level
/// object with a `default` key is unwrapped first. Entries without a usable
/// path are dropped.
///
/// ```
/// use serde_json::json;
/// use starfu_docs::toc::parse_toc_config;
///
/// let toc = parse_toc_config(Some(&json!(["intro", {"path": "api/", "label": "API"}])));
/// assert_eq!(toc.ordered.len(), 2);
/// assert_eq!(toc.alias.get("api/").map(String::as_str), Some("API"));
/// ```
#[must_use]
pub fn parse_toc_config(raw: Option<&Value>) -> TocConfig {
    let mut config = TocConfig::default();

    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return config;
    };
    let raw = raw.get("default").filter(|v| !v.is_null()).unwrap_or(raw);

    let Value::Array(items) = raw else {
        tracing::debug!("TOC descriptor is not an array, ignoring it");
        return config;
    };

    for item in items {
        match item {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                if let Some(path) = scalar_slug(item).and_then(|slug| usable_path(&slug)) {
                    config.ordered.push(TocEntry::new(path));
                }
            }
            Value::Object(object) => {
                let Some(path) = object
                    .get("path")
                    .and_then(scalar_slug)
                    .and_then(|slug| usable_path(&slug))
                else {
                    continue;
                };

                let label = object.get("label").and_then(Value::as_str).map(str::to_owned);
                let header = object.get("header").and_then(Value::as_str).map(str::to_owned);

                if let Some(label) = &label {
                    config.alias.insert(path.clone(), label.clone());
                }
                if let Some(header) = &header {
                    config.headers.insert(path.clone(), header.clone());
                }

                config.ordered.push(TocEntry {
                    path,
                    label,
                    header,
                });
            }
            other => tracing::debug!(entry = %other, "Skipping unsupported TOC entry"),
        }
    }

    config
}

/// Text of a scalar slug. YAML reads `- 2024` as a number, so numbers and
/// booleans name entries just like strings do.
fn scalar_slug(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(slug) => Some(Cow::Borrowed(slug)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        _ => None,
    }
}

/// Normalize a slug, rejecting ones that do not name anything.
fn usable_path(slug: &str) -> Option<String> {
    let path = normalize_slug(slug);
    (!path.is_empty() && path != "/").then_some(path)
}
