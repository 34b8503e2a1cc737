//! File uploads: pre-signed URLs, direct object-storage PUTs and local
//! file ingestion.

use serde_json::Value;

use crate::{
    ChunkStrategy, Fetcher, KnowledgeClient, KnowledgeError, MultipartBody, Transport,
    TransportError, UploadFile, UploadOutcome, UploadUrlRequest, fail, to_body,
};

const UPLOAD_URL: &str = "/api/knowledge/upload-url";
const UPLOAD_PROCESS: &str = "/api/upload/process";

/// Drop everything from the first `?` on.
///
/// A `?` inside the path itself also truncates there.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

impl<T: Transport, F: Fetcher> KnowledgeClient<T, F> {
    /// Ask the backend for a pre-signed object-storage upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn request_upload_url(&self, document_name: &str) -> Result<Value, KnowledgeError> {
        const OP: &str = "request_upload_url";
        let body = to_body(
            OP,
            &UploadUrlRequest {
                document_name: document_name.to_string(),
            },
        )?;
        self.transport
            .post(UPLOAD_URL, body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// `PUT` the raw file bytes to a pre-signed URL.
    ///
    /// The body is the file itself, not a multipart form, with
    /// `Content-Type` taken from the file. On success the returned URL is
    /// `presigned_url` without its query string.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] wrapping
    /// [`TransportError::UploadFailed`] for a non-2xx status, or the fetch
    /// failure itself.
    pub async fn upload_to_object_storage(
        &self,
        presigned_url: &str,
        file: UploadFile,
    ) -> Result<UploadOutcome, KnowledgeError> {
        const OP: &str = "upload_to_object_storage";
        let response = self
            .fetcher
            .put(presigned_url, file.bytes, &file.content_type)
            .await
            .map_err(|e| fail(OP, e))?;

        if !response.is_success() {
            return Err(fail(
                OP,
                TransportError::UploadFailed {
                    status: response.status,
                    status_text: response.status_text,
                },
            ));
        }

        Ok(UploadOutcome {
            success: true,
            url: strip_query(presigned_url).to_string(),
        })
    }

    /// Upload a local file for parsing, chunking and indexing.
    ///
    /// `chunk_strategy` defaults to [`ChunkStrategy::Markdown`].
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn upload_local_file(
        &self,
        file: UploadFile,
        collection_id: &str,
        library_id: i64,
        chunk_strategy: Option<ChunkStrategy>,
    ) -> Result<Value, KnowledgeError> {
        let body = MultipartBody::new("file", file)
            .text("collection_id", collection_id)
            .text("library_id", library_id.to_string())
            .text(
                "chunk_strategy",
                chunk_strategy.unwrap_or_default().as_str(),
            );
        self.transport
            .post_multipart(UPLOAD_PROCESS, body)
            .await
            .map_err(|e| fail("upload_local_file", e))
    }
}
