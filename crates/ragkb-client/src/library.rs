//! Knowledge library and document CRUD.

use serde_json::Value;

use crate::{
    AddDocumentRequest, CreateLibraryRequest, Fetcher, KnowledgeClient, KnowledgeError, Transport,
    UpdateDocumentRequest, UpdateLibraryRequest, fail, to_body,
};

const LIBRARIES: &str = "/api/knowledge/libraries";
const DOCUMENTS: &str = "/api/knowledge/documents";

fn library_path(id: i64) -> String {
    format!("{LIBRARIES}/{id}")
}

fn document_path(id: i64) -> String {
    format!("{DOCUMENTS}/{id}")
}

impl<T: Transport, F: Fetcher> KnowledgeClient<T, F> {
    /// List the current user's libraries.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn list_libraries(&self) -> Result<Value, KnowledgeError> {
        self.transport
            .get(LIBRARIES, &[])
            .await
            .map_err(|e| fail("list_libraries", e))
    }

    /// Fetch one library with its documents.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn get_library(&self, id: i64) -> Result<Value, KnowledgeError> {
        self.transport
            .get(&library_path(id), &[])
            .await
            .map_err(|e| fail("get_library", e))
    }

    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn create_library(
        &self,
        request: &CreateLibraryRequest,
    ) -> Result<Value, KnowledgeError> {
        const OP: &str = "create_library";
        let body = to_body(OP, request)?;
        self.transport
            .post(LIBRARIES, body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn update_library(
        &self,
        id: i64,
        request: &UpdateLibraryRequest,
    ) -> Result<Value, KnowledgeError> {
        const OP: &str = "update_library";
        let body = to_body(OP, request)?;
        self.transport
            .put(&library_path(id), body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn delete_library(&self, id: i64) -> Result<Value, KnowledgeError> {
        self.transport
            .delete(&library_path(id))
            .await
            .map_err(|e| fail("delete_library", e))
    }

    /// Add a text document to a library.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn add_document(&self, request: &AddDocumentRequest) -> Result<Value, KnowledgeError> {
        const OP: &str = "add_document";
        let body = to_body(OP, request)?;
        self.transport
            .post(DOCUMENTS, body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn update_document(
        &self,
        id: i64,
        request: &UpdateDocumentRequest,
    ) -> Result<Value, KnowledgeError> {
        const OP: &str = "update_document";
        let body = to_body(OP, request)?;
        self.transport
            .put(&document_path(id), body)
            .await
            .map_err(|e| fail(OP, e))
    }

    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn delete_document(&self, id: i64) -> Result<Value, KnowledgeError> {
        self.transport
            .delete(&document_path(id))
            .await
            .map_err(|e| fail("delete_document", e))
    }
}
