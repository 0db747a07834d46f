use crate::constants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard failures: caller mistakes and broken configuration.
///
/// Remote and transport failures never show up here; they are reported as
/// [`crate::invocation::Outcome`] variants plus the client's diagnostics.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown method '{method}' (no route registered at '{path}')")]
    UnknownMethod { method: String, path: String },
    #[error("Invalid route '{path}': {reason}")]
    InvalidRoute { path: String, reason: String },
    #[error("Invalid header value for '{name}': {reason}")]
    InvalidHeaderValue { name: String, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    pub(crate) fn unknown_method(method: &str, path: &str) -> Self {
        Self::UnknownMethod {
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    pub(crate) fn invalid_route(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_header_value(name: &str, reason: impl ToString) -> Self {
        Self::InvalidHeaderValue {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let (error_type, context) = match self {
            Self::UnknownMethod { .. } => ("UnknownMethod", Some(constants::ERR_UNKNOWN_METHOD)),
            Self::InvalidRoute { .. } => ("InvalidRoute", Some(constants::ERR_INVALID_ROUTE)),
            Self::InvalidHeaderValue { .. } | Self::Config(_) => {
                ("Configuration", Some(constants::ERR_CONFIG))
            }
            Self::Toml(_) => ("TOMLParsing", Some(constants::ERR_TOML_SYNTAX)),
            Self::Json(_) => ("JSONParsing", Some(constants::ERR_JSON_SYNTAX)),
            Self::HttpClient(_) => ("HttpClient", Some(constants::ERR_HTTP_CLIENT)),
        };

        JsonError {
            error_type: error_type.to_string(),
            message: self.to_string(),
            context: context.map(str::to_string),
        }
    }
}
