use reqwest::StatusCode;
use thiserror::Error;
use yapit_manifest::UpstreamError;

/// Errors fetching an interface document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source answered with a nonzero `errcode`.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("schema source returned HTTP {status}")]
    Status { status: StatusCode },

    #[error("failed to decode interface document")]
    Decode(#[from] serde_json::Error),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl SourceError {
    /// Connect failures, timeouts and 5xx answers are worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Http { source, .. } => source.is_connect() || source.is_timeout(),
            SourceError::Status { status } => status.is_server_error(),
            _ => false,
        }
    }
}
