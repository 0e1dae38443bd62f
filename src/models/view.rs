//! View and job models for the CI dashboard API.

use serde::Deserialize;

use super::{null_as_default, nulls_as_default};

/// One buildable unit within a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// CI status token, e.g. `blue`, `red_anime`, `aborted`
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
}

/// A CI dashboard view. Jobs keep the order the server returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct View {
    #[serde(deserialize_with = "nulls_as_default")]
    pub jobs: Vec<Job>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Decode a view from a raw JSON body.
pub fn decode_view(body: &[u8]) -> serde_json::Result<View> {
    serde_json::from_slice(body)
}

/// Classification of a job's color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pass,
    PassInProgress,
    Aborted,
    FailInProgress,
    Fail,
}

impl JobStatus {
    /// Classify a color token. Order matters: exact blue tokens first, then
    /// any token containing `aborted`, then `red_anime`, everything else fails.
    pub fn classify(color: &str) -> Self {
        match color {
            "blue" => Self::Pass,
            "blue_anime" => Self::PassInProgress,
            c if c.contains("aborted") => Self::Aborted,
            "red_anime" => Self::FailInProgress,
            _ => Self::Fail,
        }
    }

    /// Aborted jobs are not merge blockers.
    pub fn is_failing(&self) -> bool {
        matches!(self, Self::FailInProgress | Self::Fail)
    }

    /// Prefix of the per-job detail line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::PassInProgress => "PASS (in progress)",
            Self::Aborted => "ABORTED",
            Self::FailInProgress => "FAIL (in progress)",
            Self::Fail => "FAIL",
        }
    }
}

impl Job {
    pub fn status(&self) -> JobStatus {
        JobStatus::classify(&self.color)
    }
}
