//! Errors raised while fetching the asset list.

use thiserror::Error;

/// Network-level failures of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Endpoint unreachable, connection reset or timed out.
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-2xx status.
    #[error("'{endpoint}' returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Body was not valid JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch task panicked or was cancelled before producing a result.
    #[error("Fetch task failed: {0}")]
    Task(#[source] tokio::task::JoinError),
}

impl FetchError {
    /// Whether retrying later has a reasonable chance of succeeding.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Client(_) | FetchError::Decode(_) | FetchError::Task(_) => false,
        }
    }

    /// Short text for the header indicator.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "HTTP client unavailable",
            FetchError::Transport { .. } => "Network unreachable",
            FetchError::Status { .. } => "Server returned an error",
            FetchError::Decode(_) => "Unexpected response",
            FetchError::Task(_) => "Fetch failed unexpectedly",
        }
    }
}
