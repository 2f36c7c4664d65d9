//! `starfu prev-next` command implementation.

use clap::Args;
use starfu_docs::{DocsContext, PrevNext, prev_next};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the prev-next command.
#[derive(Args, Debug)]
pub(crate) struct PrevNextArgs {
    /// Section id.
    section: String,

    /// Public route of the current page.
    route: String,
}

impl PrevNextArgs {
    /// Find the neighbours of the route within its section.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not configured.
    pub(crate) fn neighbours(&self, context: &DocsContext) -> Result<PrevNext, CliError> {
        let nav = context.section(&self.section)?.nav();
        Ok(prev_next(&nav, &self.route))
    }

    /// Execute the prev-next command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the section is unknown, or output
    /// cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let (_, context) = global.load()?;
        write_json(&self.neighbours(&context)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use starfu_config::Branch;
    use starfu_docs::{ContentStore, NavLink};

    use super::*;

    #[test]
    fn test_neighbours_follow_navigation_order() {
        let store = ContentStore::builder()
            .page("/docs/guide/a.md")
            .page("/docs/guide/b.md")
            .page("/docs/guide/c.md")
            .build();
        let context = DocsContext::new("/site", vec![Branch::from_root("/docs/guide")], store);
        let args = PrevNextArgs {
            section: "guide".to_owned(),
            route: "/site/guide/b/".to_owned(),
        };

        let result = args.neighbours(&context).unwrap();

        assert_eq!(result.prev, Some(NavLink::new("/site/guide/a", "a")));
        assert_eq!(result.next, Some(NavLink::new("/site/guide/c", "c")));
    }
}
