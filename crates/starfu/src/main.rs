//! starfu CLI - documentation site routing.
//!
//! Provides commands for:
//! - `sections`: List configured sections
//! - `paths`: List every statically generated page
//! - `nav`: Print a section's navigation tree
//! - `resolve`: Resolve a route segment within a section
//! - `prev-next`: Print the neighbours of a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, NavArgs, PrevNextArgs, ResolveArgs};
use output::Output;

/// starfu - documentation site routing.
#[derive(Parser, Debug)]
#[command(name = "starfu", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List configured sections.
    Sections,
    /// List the route parameters of every page.
    Paths,
    /// Print the navigation tree of a section.
    Nav(NavArgs),
    /// Resolve a route segment, redirecting when it does not exist.
    Resolve(ResolveArgs),
    /// Print the previous and next pages of a route.
    PrevNext(PrevNextArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sections => commands::sections::execute(&cli.global),
        Commands::Paths => commands::paths::execute(&cli.global),
        Commands::Nav(args) => args.execute(&cli.global),
        Commands::Resolve(args) => args.execute(&cli.global),
        Commands::PrevNext(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
