//! Domain error types for canimerge.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.
//! Every variant here is fatal once it reaches `main`; recoverable detail-report
//! failures are handled inside the reporter and never become an `AppError`.

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// HTTP client could not be constructed
    #[error("Error building HTTP client. {0}")]
    Client(#[source] reqwest::Error),

    /// GET request failed at the transport level
    #[error("Error retrieving data from {url}. {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be read
    #[error("Error reading HTTP response from {url}. {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// View JSON could not be unmarshalled
    #[error("Error unmarshalling json from {url}. {source}")]
    ViewDecode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// `--checkout` could not determine the current git branch
    #[error("Can not resolve --checkout branch name. {0}")]
    GitBranch(String),

    /// Writing user output failed
    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
