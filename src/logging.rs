//! Request and response logging with automatic secret redaction.
//!
//! Redacted automatically:
//! - credential headers (`Authorization`, `trakt-api-key`, `trakt-user-token`)
//! - the API key segment embedded in legacy request URLs
//! - `password` and token fields in JSON request and response bodies
//!
//! With the client's `debug` flag set, header and body lines are promoted
//! to `info` so they show up under a default filter.

use crate::constants;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::{debug, info, trace};

/// Redacts sensitive values from strings
#[must_use]
pub fn redact_sensitive_value(value: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        constants::REDACTED.to_string()
    }
}

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    constants::is_auth_header(header_name)
}

/// Redacts the path segment holding `key`.
///
/// Only the first segment equal to the whole key is replaced: the key sits
/// right after the canonical path, so argument segments that merely contain
/// it stay readable.
#[must_use]
pub fn redact_url(url: &str, key: Option<&str>) -> String {
    let Some(key) = key.filter(|key| !key.is_empty()) else {
        return url.to_string();
    };
    let mut redacted = false;
    url.split(constants::PATH_SEPARATOR)
        .map(|segment| {
            if !redacted && segment == key {
                redacted = true;
                constants::REDACTED
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join(constants::PATH_SEPARATOR_STR)
}

/// Replaces credential fields anywhere in a JSON body. Non-JSON text is
/// returned unchanged.
#[must_use]
pub fn redact_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut value @ (Value::Object(_) | Value::Array(_))) => {
            if redact_fields(&mut value) {
                value.to_string()
            } else {
                body.to_string()
            }
        }
        _ => body.to_string(),
    }
}

fn redact_fields(value: &mut Value) -> bool {
    match value {
        Value::Object(object) => {
            let mut changed = false;
            for (name, field) in object.iter_mut() {
                if constants::is_sensitive_field(name) && !field.is_null() {
                    *field = Value::from(constants::REDACTED);
                    changed = true;
                } else {
                    changed |= redact_fields(field);
                }
            }
            changed
        }
        Value::Array(items) => items.iter_mut().fold(false, |changed, item| {
            redact_fields(item) | changed
        }),
        _ => false,
    }
}

macro_rules! detail {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!(target: "trakt_dispatch::executor", $($arg)+);
        } else {
            debug!(target: "trakt_dispatch::executor", $($arg)+);
        }
    };
}

macro_rules! body_detail {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!(target: "trakt_dispatch::executor", $($arg)+);
        } else {
            trace!(target: "trakt_dispatch::executor", $($arg)+);
        }
    };
}

fn log_headers(headers: &HeaderMap, verbose: bool) {
    for (name, value) in headers {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            redact_sensitive_value(&String::from_utf8_lossy(value.as_bytes()))
        } else {
            String::from_utf8_lossy(value.as_bytes()).to_string()
        };
        detail!(verbose, "  {}: {}", header_str, display_value);
    }
}

/// Logs an HTTP request; `url` must already be redacted
pub fn log_request(
    method: &str,
    url: &str,
    headers: &HeaderMap,
    body: Option<&str>,
    verbose: bool,
) {
    info!(
        target: "trakt_dispatch::executor",
        "→ {} {}",
        method.to_uppercase(),
        url
    );

    detail!(verbose, "Request headers:");
    log_headers(headers, verbose);

    if let Some(body_content) = body {
        body_detail!(verbose, "Request body: {}", redact_body(body_content));
    }
}

/// Logs an HTTP response status, duration and body
pub fn log_response(status: u16, duration_ms: u128, body: &str, max_body_len: usize, verbose: bool) {
    info!(
        target: "trakt_dispatch::executor",
        "← {} ({}ms)",
        status,
        duration_ms
    );

    let body = redact_body(body);
    if body.len() > max_body_len {
        let cut = floor_char_boundary(&body, max_body_len);
        body_detail!(
            verbose,
            "Response body: {} (truncated at {} chars)",
            &body[..cut],
            max_body_len
        );
    } else {
        body_detail!(verbose, "Response body: {}", body);
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

/// Gets the maximum body length from `TRAKT_LOG_MAX_BODY` environment variable
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_TRAKT_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(constants::DEFAULT_LOG_MAX_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_header_authorization() {
        assert!(should_redact_header("Authorization"));
        assert!(should_redact_header("AUTHORIZATION"));
        assert!(should_redact_header("authorization"));
    }

    #[test]
    fn test_should_redact_header_trakt_variants() {
        assert!(should_redact_header("trakt-api-key"));
        assert!(should_redact_header("Trakt-User-Token"));
    }

    #[test]
    fn test_should_not_redact_regular_header() {
        assert!(!should_redact_header("Content-Type"));
        assert!(!should_redact_header("trakt-api-version"));
        assert!(!should_redact_header("trakt-user-login"));
    }

    #[test]
    fn test_redact_sensitive_value() {
        assert_eq!(redact_sensitive_value("secret123"), "[REDACTED]");
        assert_eq!(redact_sensitive_value(""), "");
    }

    #[test]
    fn test_redact_url() {
        assert_eq!(
            redact_url("http://api.trakt.tv/show/summary.json/abc123/dexter", Some("abc123")),
            "http://api.trakt.tv/show/summary.json/[REDACTED]/dexter"
        );
        assert_eq!(redact_url("https://api.trakt.tv/x", None), "https://api.trakt.tv/x");
        assert_eq!(redact_url("https://api.trakt.tv/x", Some("")), "https://api.trakt.tv/x");
    }

    #[test]
    fn test_redact_url_leaves_argument_segments_intact() {
        assert_eq!(
            redact_url("http://api.trakt.tv/movie/summary.json/ab/abby-road", Some("ab")),
            "http://api.trakt.tv/movie/summary.json/[REDACTED]/abby-road"
        );
        assert_eq!(
            redact_url("http://api.trakt.tv/user/profile.json/ab/ab", Some("ab")),
            "http://api.trakt.tv/user/profile.json/[REDACTED]/ab"
        );
    }

    #[test]
    fn test_redact_body() {
        assert_eq!(
            redact_body(r#"{"token":"tok-1"}"#),
            r#"{"token":"[REDACTED]"}"#
        );
        let redacted: Value = serde_json::from_str(&redact_body(
            r#"{"username":"jane","password":"hunter2","email":"j@example.com"}"#,
        ))
        .unwrap();
        assert_eq!(redacted["password"], "[REDACTED]");
        assert_eq!(redacted["username"], "jane");

        let nested = redact_body(r#"[{"user":{"access_token":"a","name":"n"}}]"#);
        assert!(!nested.contains(r#""a""#));
        assert!(nested.contains(r#""name":"n""#));
    }

    #[test]
    fn test_redact_body_passes_other_text_through() {
        assert_eq!(redact_body(r#"{"title":"Heat"}"#), r#"{"title":"Heat"}"#);
        assert_eq!(redact_body("<html>oops</html>"), "<html>oops</html>");
        assert_eq!(redact_body(""), "");
    }

    #[test]
    fn test_floor_char_boundary() {
        assert_eq!(floor_char_boundary("héllo", 2), 1);
        assert_eq!(floor_char_boundary("hello", 3), 3);
        assert_eq!(floor_char_boundary("hi", 10), 2);
    }

    #[test]
    fn test_get_max_body_len_default() {
        std::env::remove_var("TRAKT_LOG_MAX_BODY");
        assert_eq!(get_max_body_len(), 1000);
    }
}
