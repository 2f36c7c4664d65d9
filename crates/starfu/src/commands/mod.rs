//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod paths;
pub(crate) mod prev_next;
pub(crate) mod resolve;
pub(crate) mod sections;

use std::path::PathBuf;

use clap::Args;
use starfu_config::{CliSettings, Config};
use starfu_docs::DocsContext;
use starfu_storage_fs::FsLoader;

use crate::error::CliError;

pub(crate) use nav::NavArgs;
pub(crate) use prev_next::PrevNextArgs;
pub(crate) use resolve::ResolveArgs;

/// Options shared by every command.
#[derive(Args, Debug)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover starfu.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Public base path (overrides config).
    #[arg(long, global = true, env = "STARFU_BASE_PATH")]
    pub base_path: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration and content into a docs context.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn load(&self) -> Result<(Config, DocsContext), CliError> {
        let settings = CliSettings {
            base_path: self.base_path.clone(),
            title: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let store = FsLoader::new(&config).load()?;
        tracing::info!(
            sections = config.branches.len(),
            documents = store.len(),
            "Loaded docs context"
        );
        let context = DocsContext::from_config(&config, store);
        Ok((config, context))
    }
}
