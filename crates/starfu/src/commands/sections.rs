//! `starfu sections` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use starfu_config::{Branch, Config};
use starfu_docs::DocsContext;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::write_json;

/// One configured section as reported by the CLI.
#[derive(Debug, Serialize)]
pub(crate) struct SectionSummary<'a> {
    #[serde(flatten)]
    branch: &'a Branch,
    /// Public route prefix of the section.
    base: String,
    /// Content directory on disk.
    dir: PathBuf,
    /// Number of documents found under the section root.
    documents: usize,
}

/// Summarize every configured section.
pub(crate) fn summaries<'a>(config: &Config, context: &'a DocsContext) -> Vec<SectionSummary<'a>> {
    context
        .sections()
        .map(|section| SectionSummary {
            branch: section.branch(),
            base: section.base().to_owned(),
            dir: config.branch_dir(section.branch()),
            documents: context.documents_for_section(section.id()).len(),
        })
        .collect()
}

/// Execute the sections command.
///
/// # Errors
///
/// Returns an error if loading fails or output cannot be written.
pub(crate) fn execute(global: &GlobalArgs) -> Result<(), CliError> {
    let (config, context) = global.load()?;
    write_json(&summaries(&config, &context))
}
