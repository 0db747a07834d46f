//! Classifies a raw transport result into an [`Outcome`].

use crate::constants;
use crate::invocation::{Outcome, RawResponse};
use crate::transport::TransportError;
use serde_json::Value;

/// Classifies one exchange.
///
/// The HTTP status does not take part: the remote reports failures in the
/// body (often alongside a 401), so the body alone decides. With
/// `reject_empty` an empty object or list counts as nothing returned.
#[must_use]
pub fn normalize(result: Result<RawResponse, TransportError>, reject_empty: bool) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(error) => {
            return Outcome::TransportFailure {
                code: error.code(),
                message: error.message,
            }
        }
    };

    if response.body.trim().is_empty() {
        return nothing_returned();
    }

    let Ok(decoded) = serde_json::from_str::<Value>(&response.body) else {
        return Outcome::EmptyOrMalformed {
            reason: format!("Malformed response body (HTTP {})", response.status),
        };
    };

    match decoded {
        Value::Object(ref object) if is_failure_envelope(object) => Outcome::ApiFailure {
            message: failure_message(object),
        },
        Value::Object(ref object) if reject_empty && object.is_empty() => nothing_returned(),
        Value::Array(ref items) if reject_empty && items.is_empty() => nothing_returned(),
        Value::Object(_) | Value::Array(_) => Outcome::Success(decoded),
        _ => nothing_returned(),
    }
}

fn nothing_returned() -> Outcome {
    Outcome::EmptyOrMalformed {
        reason: constants::MSG_NOTHING_RETURNED.to_string(),
    }
}

fn is_failure_envelope(object: &serde_json::Map<String, Value>) -> bool {
    object.get(constants::FIELD_STATUS).and_then(Value::as_str) == Some(constants::STATUS_FAILURE)
}

fn failure_message(object: &serde_json::Map<String, Value>) -> String {
    [constants::FIELD_ERROR, constants::FIELD_MESSAGE]
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str))
        .unwrap_or(constants::STATUS_FAILURE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportErrorKind;
    use serde_json::json;

    fn ok(status: u16, body: &str) -> Result<RawResponse, TransportError> {
        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_api_failure() {
        let outcome = normalize(ok(401, r#"{"status":"failure","error":"bad credentials"}"#), true);
        assert_eq!(
            outcome,
            Outcome::ApiFailure {
                message: "bad credentials".to_string()
            }
        );
    }

    #[test]
    fn test_api_failure_without_error_field() {
        let outcome = normalize(ok(400, r#"{"status":"failure"}"#), false);
        assert_eq!(
            outcome,
            Outcome::ApiFailure {
                message: "failure".to_string()
            }
        );
    }

    #[test]
    fn test_success_object_returned_verbatim() {
        let body = json!({"title": "The Walking Dead", "year": 2010, "genres": ["drama"]});
        let outcome = normalize(ok(200, &body.to_string()), true);
        assert_eq!(outcome, Outcome::Success(body));
    }

    #[test]
    fn test_success_status_is_not_failure() {
        let body = json!({"status": "success", "message": "added"});
        assert_eq!(
            normalize(ok(200, &body.to_string()), true),
            Outcome::Success(body)
        );
    }

    #[test]
    fn test_empty_aggregate_depends_on_strictness() {
        assert!(matches!(normalize(ok(200, "[]"), true), Outcome::EmptyOrMalformed { .. }));
        assert!(matches!(normalize(ok(200, "{}"), true), Outcome::EmptyOrMalformed { .. }));
        assert_eq!(normalize(ok(200, "[]"), false), Outcome::Success(json!([])));
    }

    #[test]
    fn test_absent_and_malformed_bodies() {
        assert!(matches!(normalize(ok(204, ""), false), Outcome::EmptyOrMalformed { .. }));
        assert!(matches!(normalize(ok(200, "  \n"), false), Outcome::EmptyOrMalformed { .. }));
        match normalize(ok(502, "<html>Bad Gateway</html>"), false) {
            Outcome::EmptyOrMalformed { reason } => assert!(reason.contains("502")),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(matches!(normalize(ok(200, "\"text\""), false), Outcome::EmptyOrMalformed { .. }));
        assert!(matches!(normalize(ok(200, "42"), false), Outcome::EmptyOrMalformed { .. }));
    }

    #[test]
    fn test_transport_failure() {
        let error = TransportError {
            kind: TransportErrorKind::Timeout,
            message: "operation timed out".to_string(),
        };
        assert_eq!(
            normalize(Err(error), true),
            Outcome::TransportFailure {
                code: 28,
                message: "operation timed out".to_string()
            }
        );
    }
}
