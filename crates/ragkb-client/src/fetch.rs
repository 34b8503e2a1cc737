//! Raw fetch primitive for direct uploads to pre-signed object-storage URLs.
//!
//! Pre-signed URLs carry their own credentials, so this path skips the
//! [`Transport`](crate::Transport): no base URL, no bearer token, no JSON.

use std::future::Future;

use ragkb_config::ServerConfig;
use reqwest::header::CONTENT_TYPE;

use crate::error::TransportError;
use crate::http::build_client;

/// Status line of a raw response. The body is not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

pub trait Fetcher: Send + Sync {
    /// `PUT` `body` to an absolute `url`. Any status is a successful fetch;
    /// only network failures are errors.
    fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Fetcher`] backed by a plain `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    http: reqwest::Client,
}

impl ReqwestFetcher {
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Same user agent as the API transport but no request timeout: a PUT
    /// runs for as long as the body takes to stream.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the `reqwest::Client` fails to build.
    pub fn from_config(config: &ServerConfig) -> Result<Self, TransportError> {
        Ok(Self::new(build_client(&config.user_agent, None)?))
    }
}

impl Fetcher for ReqwestFetcher {
    async fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<RawResponse, TransportError> {
        let resp = self
            .http
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}
