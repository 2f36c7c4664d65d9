//! `starfu paths` command implementation.

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Execute the paths command: list every statically generated page.
///
/// # Errors
///
/// Returns an error if loading fails or output cannot be written.
pub(crate) fn execute(global: &GlobalArgs) -> Result<(), CliError> {
    let (_, context) = global.load()?;
    write_json(&context.page_params())
}
