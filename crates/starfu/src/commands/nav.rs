//! `starfu nav` command implementation.

use clap::Args;
use starfu_docs::{DocsContext, NavNode};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::{Output, write_json};

/// Arguments for the nav command.
#[derive(Args, Debug)]
pub(crate) struct NavArgs {
    /// Section id.
    section: String,
}

impl NavArgs {
    /// Build the navigation tree of the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not configured.
    pub(crate) fn nav(&self, context: &DocsContext) -> Result<Vec<NavNode>, CliError> {
        Ok(context.section(&self.section)?.nav())
    }

    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the section is unknown, or output
    /// cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let (_, context) = global.load()?;
        let nav = self.nav(&context)?;
        if nav.is_empty() {
            Output::new().warning(&format!(
                "Section '{}' has no navigable documents",
                self.section
            ));
        }
        write_json(&nav)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use starfu_config::Branch;
    use starfu_docs::{ContentStore, DocsError};

    use super::*;

    fn context() -> DocsContext {
        let store = ContentStore::builder()
            .page("/docs/guide/a.md")
            .page("/docs/guide/g/x.md")
            .build();
        DocsContext::new("/", vec![Branch::from_root("/docs/guide")], store)
    }

    #[test]
    fn test_nav_for_known_section() {
        let args = NavArgs {
            section: "guide".to_owned(),
        };

        let nav = args.nav(&context()).unwrap();

        let dirs: Vec<_> = nav.iter().map(|n| n.dir.as_str()).collect();
        assert_eq!(dirs, vec!["a", "g"]);
    }

    #[test]
    fn test_nav_for_unknown_section_fails() {
        let args = NavArgs {
            section: "missing".to_owned(),
        };

        let err = args.nav(&context()).unwrap_err();

        assert!(matches!(
            err,
            CliError::Docs(DocsError::SectionNotConfigured(_))
        ));
        assert_eq!(err.to_string(), "Section not configured: missing");
    }
}
