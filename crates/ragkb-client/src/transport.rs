//! The request seam between [`KnowledgeClient`](crate::KnowledgeClient) and
//! the network.

use std::future::Future;
use std::time::Duration;

use ragkb_config::ServerConfig;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use crate::error::TransportError;
use crate::http::{build_client, check_response, encode_query, join_url, read_json};
use crate::types::UploadFile;

/// A multipart request: one file part plus ordered text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    /// Form field name of the file part.
    pub file_field: String,
    pub file: UploadFile,
    pub fields: Vec<(String, String)>,
}

impl MultipartBody {
    pub fn new(file_field: impl Into<String>, file: UploadFile) -> Self {
        Self {
            file_field: file_field.into(),
            file,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Value of the first text field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn into_form(self) -> Result<reqwest::multipart::Form, TransportError> {
        let part = reqwest::multipart::Part::bytes(self.file.bytes)
            .file_name(self.file.file_name)
            .mime_str(&self.file.content_type)?;
        let form = reqwest::multipart::Form::new().part(self.file_field, part);
        Ok(self
            .fields
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value)))
    }
}

/// JSON-over-HTTP transport used for every API call.
///
/// Paths are absolute API paths (`/api/...`). Implementations return the
/// parsed response body on success.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    fn post(
        &self,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    fn put(
        &self,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    fn delete(&self, path: &str) -> impl Future<Output = Result<Value, TransportError>> + Send;

    fn post_multipart(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest`, with optional bearer authentication.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            http: build_client(user_agent, Some(timeout))?,
            base_url: base_url.into(),
            token,
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ServerConfig) -> Result<Self, TransportError> {
        Self::new(
            config.base_url.clone(),
            config.bearer_token().map(str::to_string),
            config.timeout(),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        let url = format!("{}{}", join_url(&self.base_url, path), encode_query(query));
        tracing::debug!(%method, %url, "sending request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Value, TransportError> {
        let resp = check_response(builder.send().await?).await?;
        read_json(resp).await
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError> {
        Self::send(self.request(Method::GET, path, query)).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        Self::send(self.request(Method::POST, path, &[]).json(&body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        Self::send(self.request(Method::PUT, path, &[]).json(&body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        Self::send(self.request(Method::DELETE, path, &[])).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> Result<Value, TransportError> {
        let form = body.into_form()?;
        Self::send(self.request(Method::POST, path, &[]).multipart(form)).await
    }
}
