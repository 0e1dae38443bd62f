//! Run configuration derived from the command line.

use crate::cli::Cli;

/// Fixed CI server address used by the binary.
pub const DEFAULT_CI_BASE_URL: &str = "http://ci";

/// View holding the master build.
pub const MASTER_VIEW: &str = "A-master";

/// Name printed in the master verdict line.
pub const MASTER_DISPLAY: &str = "master";

/// Prefix of every branch view name.
pub const BRANCH_VIEW_PREFIX: &str = "branch-";

/// Where the branch under test comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSource {
    /// Resolve from the current git checkout
    Checkout,
    /// Given on the command line
    Named(String),
    /// Neither given; print usage and stop
    Missing,
}

impl BranchSource {
    /// `--checkout` takes precedence over a positional branch.
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.checkout {
            return Self::Checkout;
        }
        match cli.branch.as_deref() {
            Some(name) if !name.is_empty() => Self::Named(name.to_string()),
            _ => Self::Missing,
        }
    }
}

/// Settings threaded through the client, evaluator and reporter.
#[derive(Debug, Clone)]
pub struct Config {
    /// CI server base URL, without trailing slash
    pub ci_base_url: String,
    /// Print per-job status lines and failing test cases
    pub detail: bool,
    /// Echo fetched URLs and raw bodies
    pub debug: bool,
}

impl Config {
    /// Build the configuration for a CLI run against the fixed CI server.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            ci_base_url: DEFAULT_CI_BASE_URL.to_string(),
            detail: cli.detail,
            debug: cli.debug,
        }
    }

    /// Point the configuration at another CI server (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.ci_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Default tracing filter when `RUST_LOG` is unset. `--debug` only raises
    /// this crate's targets; dependencies stay at `warn`.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "warn,canimerge=debug,canimerge_lib=debug"
        } else {
            "warn"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ci_base_url: DEFAULT_CI_BASE_URL.to_string(),
            detail: false,
            debug: false,
        }
    }
}

/// View name for a branch.
pub fn branch_view(branch: &str) -> String {
    format!("{BRANCH_VIEW_PREFIX}{branch}")
}
