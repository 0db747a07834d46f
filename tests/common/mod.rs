//! Shared test utilities: a recording transport and client constructors

#![allow(dead_code)]

use serde_json::Value;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use trakt_dispatch::{
    Client, ClientConfig, Mode, PreparedRequest, RawResponse, Transport, TransportError,
};

type Handler = Box<dyn Fn(&PreparedRequest) -> Result<RawResponse, TransportError> + Send + Sync>;

/// Transport that records every request and answers from a handler
pub struct SpyTransport {
    handler: Handler,
    calls: AtomicUsize,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl SpyTransport {
    pub fn new(
        handler: impl Fn(&PreparedRequest) -> Result<RawResponse, TransportError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with `status` and `body`
    pub fn replying(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(ok(status, &body)))
    }

    /// Answers every request with `value` as JSON
    pub fn replying_json(value: &Value) -> Self {
        Self::replying(200, &value.to_string())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for SpyTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}

pub fn ok(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: body.to_string(),
    }
}

pub fn v1_config() -> ClientConfig {
    ClientConfig::with_api_key("KEY").base_url("http://api.trakt.tv")
}

pub fn v2_config() -> ClientConfig {
    ClientConfig::with_application("CID", "CSECRET", "urn:ietf:wg:oauth:2.0:oob", Mode::Production)
        .base_url("https://api.trakt.tv")
}

pub fn v1_client(transport: SpyTransport) -> Client<SpyTransport> {
    Client::with_transport(v1_config(), transport).unwrap()
}

pub fn v2_client(transport: SpyTransport) -> Client<SpyTransport> {
    Client::with_transport(v2_config(), transport).unwrap()
}

/// In-memory sink for formatted tracing output
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Installs a subscriber for the current thread that writes here
    pub fn install(&self, max_level: tracing::Level) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
