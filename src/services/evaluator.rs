//! View evaluation: decide whether every job in a view is blue.

use std::io::Write;

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{View, decode_view};
use crate::services::ci_client::CiClient;
use crate::services::failure_report::report_failures;

/// Walk `view`'s jobs in order and return `true` when none is failing.
///
/// Aborted jobs never fail the view. In detail mode one status line is written
/// per job, and each failing job's test report is looked up before moving on.
pub async fn evaluate_view<W: Write>(
    client: &CiClient,
    config: &Config,
    view: &View,
    view_name: &str,
    out: &mut W,
) -> AppResult<bool> {
    let mut blue = true;

    for job in &view.jobs {
        let status = job.status();
        if config.detail {
            writeln!(out, "{}: {}", status.label(), job.name)?;
        }
        if status.is_failing() {
            debug!("{} is failing in {} (color {})", job.name, view_name, job.color);
            blue = false;
            if config.detail {
                report_failures(client, view_name, &job.name, out).await?;
            }
        }
    }

    Ok(blue)
}

/// Fetch, decode and evaluate one view, then print its verdict line.
///
/// Fetch and decode failures are fatal for the view and propagate.
pub async fn check_view<W: Write>(
    client: &CiClient,
    config: &Config,
    view_name: &str,
    display: &str,
    out: &mut W,
) -> AppResult<bool> {
    let url = client.view_url(view_name);
    let body = client.fetch(&url, out).await?;
    let view = decode_view(&body).map_err(|source| AppError::ViewDecode { url, source })?;

    let blue = evaluate_view(client, config, &view, view_name, out).await?;
    let verdict = if blue { "PASS" } else { "FAIL" };
    writeln!(out, ">> {}: {}.", verdict, display)?;

    Ok(blue)
}
