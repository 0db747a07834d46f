//! The HTTP collaborator: one request in, one raw response (or error) out.

use crate::config::ClientConfig;
use crate::constants;
use crate::error::Error;
use crate::invocation::{PreparedRequest, RawResponse};
use std::future::Future;

/// Broad cause of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Connect,
    Timeout,
    Redirect,
    Body,
    Request,
    Other,
}

impl TransportErrorKind {
    /// Numeric code, numbered after libcurl's error codes.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Other => 2,
            Self::Request => 3,
            Self::Connect => 7,
            Self::Timeout => 28,
            Self::Redirect => 47,
            Self::Body => 56,
        }
    }
}

/// A request that produced no HTTP response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.kind.code()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_redirect() {
            TransportErrorKind::Redirect
        } else if error.is_body() || error.is_decode() {
            TransportErrorKind::Body
        } else if error.is_builder() || error.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations must not retry; the caller sees exactly one result per request.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the HTTP client: fixed timeout, bounded redirects, TLS
    /// verification on unless the configuration opts out.
    ///
    /// # Errors
    /// Returns [`Error::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        install_crypto_provider();

        if config.insecure_skip_tls_verify {
            tracing::warn!(
                target: "trakt_dispatch::transport",
                "TLS certificate verification is disabled"
            );
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(
                constants::DEFAULT_MAX_REDIRECTS,
            ))
            .danger_accept_invalid_certs(config.insecure_skip_tls_verify)
            .build()?;
        Ok(Self { client })
    }
}

/// Installs the process-wide rustls provider; later calls are no-ops.
fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();
    let _ = provider.install_default();
}

impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransportErrorKind::Connect.code(), 7);
        assert_eq!(TransportErrorKind::Timeout.code(), 28);
        let error = TransportError {
            kind: TransportErrorKind::Redirect,
            message: "too many redirects".to_string(),
        };
        assert_eq!(error.code(), 47);
        assert_eq!(error.to_string(), "too many redirects");
    }

    #[test]
    fn test_http_transport_builds_with_defaults() {
        let config = ClientConfig::with_api_key("k");
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn test_http_transport_builds_insecure() {
        let config = ClientConfig::with_api_key("k").insecure_skip_tls_verify();
        assert!(HttpTransport::new(&config).is_ok());
    }
}
