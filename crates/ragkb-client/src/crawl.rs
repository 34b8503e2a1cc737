//! Site crawling and object-storage document processing.

use serde_json::Value;

use crate::{
    CrawlRequest, Fetcher, KnowledgeClient, KnowledgeError, ProcessOssDocumentRequest, Transport,
    fail, to_body,
};

const CRAWL_SITE: &str = "/api/crawl/site";
const CRAWL_STATUS: &str = "/api/crawl/status";
const PROCESS_OSS_DOCUMENT: &str = "/api/crawl/process-oss-document";

impl<T: Transport, F: Fetcher> KnowledgeClient<T, F> {
    /// Start a background crawl of `request.url` into a library.
    ///
    /// The backend acknowledges immediately; poll [`Self::crawl_status`]
    /// for progress.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn crawl_site(&self, request: &CrawlRequest) -> Result<Value, KnowledgeError> {
        const OP: &str = "crawl_site";
        let body = to_body(OP, request)?;
        self.transport
            .post(CRAWL_SITE, body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// Crawler status for a collection.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn crawl_status(&self, collection_name: &str) -> Result<Value, KnowledgeError> {
        self.transport
            .get(&format!("{CRAWL_STATUS}/{collection_name}"), &[])
            .await
            .map_err(|e| fail("crawl_status", e))
    }

    /// Have the backend parse and index a document already uploaded to
    /// object storage.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn process_oss_document(
        &self,
        request: &ProcessOssDocumentRequest,
    ) -> Result<Value, KnowledgeError> {
        const OP: &str = "process_oss_document";
        let body = to_body(OP, request)?;
        self.transport
            .post(PROCESS_OSS_DOCUMENT, body)
            .await
            .map_err(|e| fail(OP, e))
    }
}
