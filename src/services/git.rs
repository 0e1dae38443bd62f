//! Current git branch lookup for `--checkout`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Short name of the branch checked out in the current directory.
pub fn resolve_current_branch() -> AppResult<String> {
    resolve_current_branch_in(Path::new("."))
}

/// Short name of the branch checked out in `dir`.
pub fn resolve_current_branch_in(dir: &Path) -> AppResult<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--symbolic-full-name", "--abbrev-ref", "HEAD"])
        .current_dir(dir)
        .output()
        .map_err(|e| AppError::GitBranch(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::GitBranch(format!(
            "git rev-parse exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("Resolved current git branch: {}", branch);
    Ok(branch)
}
