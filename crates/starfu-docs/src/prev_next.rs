//! Previous/next links across a section's navigation.

use serde::Serialize;

use crate::nav::{NavLink, NavNode};
use crate::path::normalize;

/// Neighbours of the current page in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext {
    /// Page before the current one.
    pub prev: Option<NavLink>,
    /// Page after the current one.
    pub next: Option<NavLink>,
}

/// Flatten a navigation tree into reading order.
///
/// Groups contribute their items; leaves contribute themselves.
#[must_use]
pub fn flatten_nav(nav: &[NavNode]) -> Vec<NavLink> {
    nav.iter()
        .flat_map(|node| match &node.href {
            Some(href) if node.items.is_empty() => {
                vec![NavLink::new(href.clone(), node.label.clone())]
            }
            _ => node.items.clone(),
        })
        .collect()
}

/// Find the pages around `current` in the flattened navigation.
///
/// URLs are compared without a trailing slash. An unknown `current` has no
/// neighbours.
#[must_use]
pub fn prev_next(nav: &[NavNode], current: &str) -> PrevNext {
    let flat = flatten_nav(nav);
    let current = normalize(current);

    let Some(index) = flat.iter().position(|link| normalize(&link.url) == current) else {
        return PrevNext::default();
    };

    PrevNext {
        prev: index.checked_sub(1).and_then(|i| flat.get(i)).cloned(),
        next: flat.get(index + 1).cloned(),
    }
}
