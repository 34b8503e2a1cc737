//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a [`Transport`](crate::Transport) or
/// [`Fetcher`](crate::Fetcher).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body as JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request body could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(String),

    /// Object storage rejected a direct upload.
    #[error("upload failed: {status} {status_text}")]
    UploadFailed {
        /// HTTP status code returned by object storage.
        status: u16,
        /// Canonical reason phrase for `status`.
        status_text: String,
    },
}

/// Errors returned by [`KnowledgeClient`](crate::KnowledgeClient) operations.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The underlying request failed. `source` is the transport failure as
    /// reported, unmodified.
    #[error("{operation} failed: {source}")]
    Transport {
        /// Operation label (e.g., `create_library`).
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// A local file could not be read for upload.
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KnowledgeError {
    /// The operation label, if this error came from a request.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Transport { operation, .. } => Some(*operation),
            Self::File { .. } => None,
        }
    }

    /// The transport failure carried by this error, if any.
    #[must_use]
    pub const fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::File { .. } => None,
        }
    }
}
