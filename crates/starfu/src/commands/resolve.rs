//! `starfu resolve` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the resolve command.
#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Section id.
    section: String,

    /// Route segment relative to the section (default: section root).
    #[arg(default_value = "")]
    segment: String,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the section is unknown, or output
    /// cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let (_, context) = global.load()?;
        let section = context.section(&self.section)?;
        write_json(&section.resolve_or_next(&self.segment))
    }
}
