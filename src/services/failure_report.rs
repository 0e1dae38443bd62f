//! Failure detail reporter.
//!
//! Lists the failing test cases of a job's last completed build. A missing or
//! undecodable report is expected for some job types and only produces a
//! notice; the only error returned is a failed write to the output sink.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{TestReport, decode_test_report};
use crate::services::ci_client::CiClient;

/// Fetch `job_name`'s test report from `view_name` and print its failed cases.
pub async fn report_failures<W: Write>(
    client: &CiClient,
    view_name: &str,
    job_name: &str,
    out: &mut W,
) -> AppResult<()> {
    let url = client.test_report_url(view_name, job_name);

    let body = match client.fetch(&url, out).await {
        Ok(body) => body,
        Err(AppError::Output(e)) => return Err(AppError::Output(e)),
        Err(e) => {
            warn!("Detail lookup for {} failed: {}", job_name, e);
            write_no_details(job_name, out)?;
            return Ok(());
        }
    };

    let report = match decode_test_report(&body) {
        Ok(report) => report,
        Err(e) => {
            debug!("Test report for {} is not decodable: {}", job_name, e);
            write_no_details(job_name, out)?;
            return Ok(());
        }
    };

    let printed = write_failed_cases(&report, out)?;

    if client.debug() && !printed {
        writeln!(out, "DEBUG BODY:\n{}", String::from_utf8_lossy(&body))?;
    }

    Ok(())
}

/// Write one `\t<suite> <case> failed` line per failed case. Returns whether
/// anything was written.
pub fn write_failed_cases<W: Write>(report: &TestReport, out: &mut W) -> io::Result<bool> {
    let mut printed = false;
    for (suite, case) in report.failed_cases() {
        writeln!(out, "\t{} {} failed", suite, case)?;
        printed = true;
    }
    Ok(printed)
}

fn write_no_details<W: Write>(job_name: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "\tNo detail results available for {}.", job_name)
}
