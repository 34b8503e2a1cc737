//! Recording stubs for [`Transport`] and [`Fetcher`], plus a WARN counter.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ragkb_client::{
    Fetcher, KnowledgeClient, MultipartBody, RawResponse, Transport, TransportError,
};
use serde_json::Value;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One recorded transport request.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub multipart: Option<MultipartBody>,
}

impl Call {
    pub fn new(method: &'static str, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            multipart: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

type ErrorFactory = Box<dyn Fn() -> TransportError + Send + Sync>;

enum Reply {
    Value(Value),
    Fail(ErrorFactory),
}

/// Transport that records every call and answers with a canned reply.
pub struct StubTransport {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
}

impl StubTransport {
    pub fn ok(value: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Value(value),
        }
    }

    pub fn failing(make: impl Fn() -> TransportError + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Fail(Box::new(make)),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Value(value) => Ok(value.clone()),
            Reply::Fail(make) => Err(make()),
        }
    }
}

impl Transport for StubTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError> {
        let mut call = Call::new("GET", path);
        call.query = query
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.record(call)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.record(Call::new("POST", path).with_body(body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.record(Call::new("PUT", path).with_body(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.record(Call::new("DELETE", path))
    }

    async fn post_multipart(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> Result<Value, TransportError> {
        let mut call = Call::new("POST", path);
        call.multipart = Some(body);
        self.record(call)
    }
}

/// One recorded raw PUT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Put {
    pub url: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Fetcher that records PUTs and answers with a fixed status.
pub struct StubFetcher {
    puts: Mutex<Vec<Put>>,
    status: u16,
    status_text: &'static str,
    fail_network: bool,
}

impl StubFetcher {
    pub fn status(status: u16, status_text: &'static str) -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            status,
            status_text,
            fail_network: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_network: true,
            ..Self::status(0, "")
        }
    }

    pub fn puts(&self) -> Vec<Put> {
        self.puts.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    async fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<RawResponse, TransportError> {
        self.puts.lock().unwrap().push(Put {
            url: url.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        if self.fail_network {
            return Err(TransportError::Parse("connection reset by peer".into()));
        }
        Ok(RawResponse {
            status: self.status,
            status_text: self.status_text.to_string(),
        })
    }
}

pub type StubClient = KnowledgeClient<StubTransport, StubFetcher>;

pub fn client_ok(value: Value) -> StubClient {
    KnowledgeClient::new(StubTransport::ok(value), StubFetcher::status(200, "OK"))
}

pub fn client_failing(
    make: impl Fn() -> TransportError + Send + Sync + 'static,
) -> StubClient {
    KnowledgeClient::new(StubTransport::failing(make), StubFetcher::status(200, "OK"))
}

pub fn client_with_fetcher(fetcher: StubFetcher) -> StubClient {
    KnowledgeClient::new(StubTransport::ok(Value::Null), fetcher)
}

/// Counts WARN events seen by the thread-local subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install a WARN-counting subscriber for the current thread.
///
/// Keep the guard alive for as long as events should be counted.
pub fn count_warnings() -> (Arc<AtomicUsize>, tracing::subscriber::DefaultGuard) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    let guard = tracing::subscriber::set_default(subscriber);
    (count, guard)
}
