//! Section routing and navigation for starfu documentation sites.
//!
//! This crate provides:
//! - [`ContentStore`]: discovered documents and raw TOC descriptors
//! - [`DocsContext`]: resolved branches bound to a store
//! - [`Section`]: per-section entries, navigation tree and route resolution
//! - [`prev_next`]: reading-order neighbours of a page
//!
//! Nothing here performs I/O. Discovery happens ahead of time (see
//! `starfu-storage-fs`), and every query is a pure function of the store.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use serde_json::json;
//! use starfu_config::Branch;
//! use starfu_docs::{ContentStore, DocsContext, Outcome, prev_next};
//!
//! let store = ContentStore::builder()
//!     .page("/docs/tutorial/intro.md")
//!     .page("/docs/tutorial/basics/setup.md")
//!     .toc("/docs/tutorial/_toc.yaml", json!(["intro", "basics/"]))
//!     .build();
//! let context = DocsContext::new("/", vec![Branch::from_root("/docs/tutorial")], store);
//!
//! let section = context.section("tutorial")?;
//! let nav = section.nav();
//! assert_eq!(nav[0].href.as_deref(), Some("/tutorial/intro"));
//!
//! let resolution = section.resolve_or_next("");
//! assert!(matches!(resolution.outcome, Outcome::Redirect { ref url } if url == "/tutorial/intro"));
//!
//! let around = prev_next(&nav, "/tutorial/intro");
//! assert_eq!(around.next.map(|link| link.url).as_deref(), Some("/tutorial/basics/setup"));
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod nav;
pub mod path;
mod prev_next;
mod resolve;
mod section;
mod store;
pub mod toc;

pub use context::{DocsContext, PageParams};
pub use error::DocsError;
pub use nav::{NavLink, NavNode, capitalize};
pub use prev_next::{PrevNext, flatten_nav, prev_next};
pub use resolve::{Outcome, Resolver, RouteResolution, resolve_or_next};
pub use section::Section;
pub use store::{ContentStore, ContentStoreBuilder, Document, TOC_EXTENSIONS, TOC_FILE_STEM};
pub use toc::{TocConfig, TocEntry, parse_toc_config};
