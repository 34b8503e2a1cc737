//! # ragkb-client
//!
//! Async HTTP client for the knowledge-library API of the RAG backend.
//!
//! One method per backend endpoint:
//! - libraries: list, get, create, update, delete
//! - documents: add, update, delete
//! - uploads: pre-signed URL issuance, direct object-storage upload,
//!   local file ingestion, object-storage document processing
//! - crawling: start a site crawl, query crawl status
//! - knowledge graph retrieval
//!
//! Every operation issues exactly one request and returns the backend's
//! parsed JSON body unchanged. Failures come back as
//! [`KnowledgeError::Transport`] carrying the original [`TransportError`];
//! nothing is retried.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use ragkb_client::{CreateLibraryRequest, KnowledgeClient};
//!
//! let config = ragkb_config::KbConfig::load()?;
//! let client = KnowledgeClient::from_config(&config.server)?;
//! let created = client
//!     .create_library(&CreateLibraryRequest {
//!         title: "Rust".into(),
//!         description: "ownership notes".into(),
//!     })
//!     .await?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

pub mod crawl;
pub mod graph;
pub mod library;
pub mod upload;

mod error;
mod fetch;
mod http;
mod transport;
mod types;

pub use error::{KnowledgeError, TransportError};
pub use fetch::{Fetcher, RawResponse, ReqwestFetcher};
pub use transport::{HttpTransport, MultipartBody, Transport};
pub use types::{
    AddDocumentRequest, ChunkStrategy, CrawlRequest, CreateLibraryRequest, DEFAULT_GRAPH_LABEL,
    ProcessOssDocumentRequest, UpdateDocumentRequest, UpdateLibraryRequest, UploadFile,
    UploadOutcome, UploadUrlRequest, content_type_for,
};

use ragkb_config::ServerConfig;
use serde::Serialize;
use serde_json::Value;

// ── Client ─────────────────────────────────────────────────────────

/// Client for the knowledge-library API.
///
/// Holds only immutable handles, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct KnowledgeClient<T = HttpTransport, F = ReqwestFetcher> {
    transport: T,
    fetcher: F,
}

impl KnowledgeClient {
    /// Build a reqwest-backed client from the `[server]` config section.
    ///
    /// `timeout_secs` applies to API calls only; direct object-storage
    /// uploads are not time-limited.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if a `reqwest::Client` fails to build.
    pub fn from_config(config: &ServerConfig) -> Result<Self, TransportError> {
        Ok(Self::new(
            HttpTransport::from_config(config)?,
            ReqwestFetcher::from_config(config)?,
        ))
    }
}

impl<T: Transport, F: Fetcher> KnowledgeClient<T, F> {
    pub const fn new(transport: T, fetcher: F) -> Self {
        Self { transport, fetcher }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Backend liveness probe (`GET /health`).
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn health(&self) -> Result<Value, KnowledgeError> {
        self.transport
            .get("/health", &[])
            .await
            .map_err(|e| fail("health", e))
    }
}

/// Label a transport failure with its operation and emit the one diagnostic.
pub(crate) fn fail(operation: &'static str, source: TransportError) -> KnowledgeError {
    tracing::warn!(operation, error = %source, "knowledge api request failed");
    KnowledgeError::Transport { operation, source }
}

/// Serialize a request body.
pub(crate) fn to_body<B: Serialize>(
    operation: &'static str,
    body: &B,
) -> Result<Value, KnowledgeError> {
    serde_json::to_value(body).map_err(|e| fail(operation, TransportError::Encode(e.to_string())))
}
