//! Transport-agnostic invocation model.
//!
//! [`PreparedRequest`] is what the request builder hands to a
//! [`crate::transport::Transport`]; [`Outcome`] is what the response
//! normalizer hands back to the caller. Neither type knows about `reqwest`
//! beyond its `Method` and `HeaderMap` vocabulary types.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;

/// A fully assembled request, built once per call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// `GET` unless the route forces `POST`.
    pub method: Method,

    /// Absolute URL including host, canonical path, key segment and bound suffix.
    pub url: String,

    /// Client, version and authentication headers.
    pub headers: HeaderMap,

    /// Serialized JSON body; `None` when nothing was bound to the body.
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Parses the serialized body back into a value.
    #[must_use]
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }

    /// Header value as text, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Raw result of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Classified result of a call. Exactly one variant applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The body decoded to an object or list; returned verbatim.
    Success(Value),

    /// The remote answered with `{"status": "failure", ...}`.
    ApiFailure {
        /// Remote-supplied error message.
        message: String,
    },

    /// The body was absent, not JSON, not an aggregate, or (for strict versions) empty.
    EmptyOrMalformed {
        reason: String,
    },

    /// The request never produced a response.
    TransportFailure {
        code: u32,
        message: String,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Decoded payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses to the two-valued legacy contract: payload or nothing.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric error code; zero for everything but transport failures.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::TransportFailure { code, .. } => *code,
            _ => 0,
        }
    }

    /// Failure message, `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::ApiFailure { message } | Self::TransportFailure { message, .. } => Some(message),
            Self::EmptyOrMalformed { reason } => Some(reason),
        }
    }
}

/// Details about the most recent exchange, kept on the client after a call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub last_url: Option<String>,
    pub last_status: Option<u16>,
    /// Zero unless the last exchange failed at the transport level.
    pub last_error_code: u32,
    pub last_error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_accessors() {
        let success = Outcome::Success(json!({"a": 1}));
        assert!(success.is_success());
        assert_eq!(success.error_code(), 0);
        assert_eq!(success.error_message(), None);
        assert_eq!(success.into_data(), Some(json!({"a": 1})));

        let failure = Outcome::TransportFailure {
            code: 28,
            message: "timed out".to_string(),
        };
        assert!(!failure.is_success());
        assert_eq!(failure.error_code(), 28);
        assert_eq!(failure.error_message(), Some("timed out"));
        assert_eq!(failure.data(), None);

        let api = Outcome::ApiFailure {
            message: "bad credentials".to_string(),
        };
        assert_eq!(api.error_code(), 0);
        assert_eq!(api.error_message(), Some("bad credentials"));
        assert_eq!(api.into_data(), None);
    }

    #[test]
    fn test_prepared_request_helpers() {
        let mut headers = HeaderMap::new();
        headers.insert("trakt-api-version", "2".parse().unwrap());
        let request = PreparedRequest {
            method: Method::POST,
            url: "https://api.trakt.tv/checkin".to_string(),
            headers,
            body: Some(r#"{"movie":{"title":"Heat"}}"#.to_string()),
        };
        assert_eq!(request.header("trakt-api-version"), Some("2"));
        assert_eq!(request.header("missing"), None);
        assert_eq!(request.json_body(), Some(json!({"movie": {"title": "Heat"}})));
    }
}
