//! Plumbing behind [`HttpTransport`](crate::HttpTransport) and
//! [`ReqwestFetcher`](crate::ReqwestFetcher): client construction, status
//! mapping into [`TransportError`], URL assembly and body decoding.

use std::time::Duration;

use serde_json::Value;

use crate::error::TransportError;

/// Build a `reqwest::Client` with the configured user agent.
///
/// `timeout` bounds the whole exchange, body upload included. Direct
/// object-storage uploads pass `None` so large files are never cut off.
pub fn build_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<reqwest::Client, TransportError> {
    let builder = reqwest::Client::builder().user_agent(user_agent);
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    Ok(builder.build()?)
}

/// Map an API response status onto [`TransportError`].
///
/// 429 becomes [`TransportError::RateLimited`], honouring `Retry-After` in
/// seconds (60 when missing). Any other non-2xx becomes
/// [`TransportError::Api`] with the backend's error body as the message.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, TransportError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TransportError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }
    Err(TransportError::Api {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

/// Decode a successful response body as JSON. Blank bodies become `null`.
pub async fn read_json(resp: reqwest::Response) -> Result<Value, TransportError> {
    let bytes = resp.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| TransportError::Parse(e.to_string()))
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Join a base URL and an absolute API path with exactly one `/` between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Render query pairs as `?k=v&k2=v2`, percent-encoding keys and values.
/// Returns an empty string for an empty slice.
pub fn encode_query(query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}
