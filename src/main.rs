//! canimerge - Main entry point.
//!
//! Checks the master view and a branch view on the CI server and prints
//! whether each is passing.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use canimerge_lib::cli::{self, Cli};
use canimerge_lib::config::{BranchSource, Config};
use canimerge_lib::error::AppError;
use canimerge_lib::services::{resolve_current_branch, run_merge_check};

fn fatal(err: AppError) -> ExitCode {
    error!("{}", err);
    ExitCode::FAILURE
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Allow RUST_LOG to come from a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Initialize logging; diagnostics go to stderr, results to stdout
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    let branch = match BranchSource::from_cli(&cli) {
        BranchSource::Checkout => match resolve_current_branch() {
            Ok(branch) => branch,
            Err(e) => return fatal(e),
        },
        BranchSource::Named(branch) => branch,
        BranchSource::Missing => String::new(),
    };

    if branch.is_empty() {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }

    let mut stdout = std::io::stdout().lock();
    match run_merge_check(&config, &branch, &mut stdout).await {
        // The verdict is in the printed lines, not the exit status
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fatal(e),
    }
}
