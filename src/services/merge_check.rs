//! Top-level merge check: master view first, then the branch view.

use std::io::Write;

use tracing::debug;

use crate::config::{self, Config, MASTER_DISPLAY, MASTER_VIEW};
use crate::error::AppResult;
use crate::services::ci_client::CiClient;
use crate::services::evaluator::check_view;

/// Outcome of both view checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeVerdict {
    pub master_blue: bool,
    pub branch_blue: bool,
}

impl MergeVerdict {
    pub fn can_merge(&self) -> bool {
        self.master_blue && self.branch_blue
    }
}

/// Check the master view and then `branch`'s view, writing all output to `out`.
///
/// The verdict is reported through the printed lines; callers do not map it
/// to an exit status.
pub async fn run_merge_check<W: Write>(
    config: &Config,
    branch: &str,
    out: &mut W,
) -> AppResult<MergeVerdict> {
    let client = CiClient::new(config)?;

    let master_blue = check_view(&client, config, MASTER_VIEW, MASTER_DISPLAY, out).await?;
    if config.detail {
        writeln!(out)?;
    }

    let branch_view = config::branch_view(branch);
    let branch_blue = check_view(&client, config, &branch_view, branch, out).await?;
    if config.detail {
        writeln!(out)?;
    }
    out.flush()?;

    let verdict = MergeVerdict {
        master_blue,
        branch_blue,
    };
    debug!("Merge check for {}: {:?}", branch, verdict);
    Ok(verdict)
}
