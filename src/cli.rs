//! Command-line surface.

use clap::{ArgAction, CommandFactory, Parser};

pub const USAGE: &str = "Usage: canimerge [--debug] [--detail] <--checkout | branchname>";

#[derive(Debug, Parser)]
#[command(name = "canimerge")]
#[command(about = "Check whether the master and branch CI views are blue.")]
pub struct Cli {
    /// Print detailed job status.
    #[arg(long, action = ArgAction::SetTrue)]
    pub detail: bool,
    /// Print retrieved json (verbose)
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
    /// Use the currently checked-out git branch instead of <branch>
    #[arg(long, action = ArgAction::SetTrue)]
    pub checkout: bool,
    /// Branch whose `branch-<name>` view is checked
    pub branch: Option<String>,
}

/// Print usage and flag help to stderr.
pub fn print_usage() {
    eprintln!("\n{USAGE}\n");
    eprintln!("{}", Cli::command().render_help());
}
