//! Centralized string constants for the Trakt dispatch client
//!
//! This module contains commonly used string literals to:
//! - Reduce string duplication
//! - Improve maintainability
//! - Ensure consistency across the codebase

// HTTP Headers
pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_AUTHORIZATION: &str = "authorization";
pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_USER_AGENT: &str = "user-agent";
pub const HEADER_TRAKT_API_VERSION: &str = "trakt-api-version";
pub const HEADER_TRAKT_API_KEY: &str = "trakt-api-key";
pub const HEADER_TRAKT_USER_LOGIN: &str = "trakt-user-login";
pub const HEADER_TRAKT_USER_TOKEN: &str = "trakt-user-token";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Header values
pub const TRAKT_API_VERSION_2: &str = "2";
pub const USER_AGENT: &str = concat!("trakt-dispatch/", env!("CARGO_PKG_VERSION"));

// Hosts
pub const V1_PRODUCTION_HOST: &str = "http://api.trakt.tv";
pub const V1_STAGING_HOST: &str = "http://api-staging.trakt.tv";
pub const V2_PRODUCTION_HOST: &str = "https://api.trakt.tv";
pub const V2_STAGING_HOST: &str = "https://api-staging.trakt.tv";

// Path conventions
pub const PATH_SEPARATOR: char = '/';
pub const PATH_SEPARATOR_STR: &str = "/";
pub const V1_PATH_SUFFIX: &str = ".json/";
pub const V2_PATH_SUFFIX: &str = "";
pub const V2_LOGIN_PATH: &str = "/auth/login";

// Reserved descriptor name whose value becomes the whole request body
pub const BULK_BODY_FIELD: &str = "json";

// Login exchange fields
pub const LOGIN_FIELD_LOGIN: &str = "login";
pub const LOGIN_FIELD_PASSWORD: &str = "password";
pub const LOGIN_FIELD_TOKEN: &str = "token";

// Remote failure envelope
pub const FIELD_STATUS: &str = "status";
pub const FIELD_ERROR: &str = "error";
pub const FIELD_MESSAGE: &str = "message";
pub const STATUS_FAILURE: &str = "failure";

// Environment Variables
pub const ENV_TRAKT_API_KEY: &str = "TRAKT_API_KEY";
pub const ENV_TRAKT_CLIENT_ID: &str = "TRAKT_CLIENT_ID";
pub const ENV_TRAKT_CLIENT_SECRET: &str = "TRAKT_CLIENT_SECRET";
pub const ENV_TRAKT_REDIRECT_URI: &str = "TRAKT_REDIRECT_URI";
pub const ENV_TRAKT_ENV: &str = "TRAKT_ENV";
pub const ENV_TRAKT_BASE_URL: &str = "TRAKT_BASE_URL";
pub const ENV_TRAKT_LOG_MAX_BODY: &str = "TRAKT_LOG_MAX_BODY";

// Common Response Messages
pub const MSG_NOTHING_RETURNED: &str = "Nothing returned";
pub const MSG_LOGIN_NO_TOKEN: &str = "Login response did not contain a session token";
pub const REDACTED: &str = "[REDACTED]";

// Error Context Messages
pub const ERR_UNKNOWN_METHOD: &str =
    "Check the method name against the routes registered for this API version.";
pub const ERR_INVALID_ROUTE: &str = "This route table entry is malformed. Please report it.";
pub const ERR_CONFIG: &str = "Check the client configuration and TRAKT_* environment variables.";
pub const ERR_TOML_SYNTAX: &str = "Check that your configuration is valid TOML syntax.";
pub const ERR_JSON_SYNTAX: &str = "Check that your request body contains valid JSON.";
pub const ERR_HTTP_CLIENT: &str = "The HTTP client could not be initialised.";

// Default Values
pub const DEFAULT_TIMEOUT_SECS: u64 = 40;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_LOG_MAX_BODY: usize = 1000;

/// Check if a header name carries credentials
#[must_use]
pub fn is_auth_header(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "authorization" | "proxy-authorization" | "trakt-api-key" | "trakt-user-token" | "cookie"
    )
}

/// Check if a JSON body field carries a credential
#[must_use]
pub fn is_sensitive_field(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "password" | "token" | "access_token" | "refresh_token" | "client_secret"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sensitive_field() {
        assert!(is_sensitive_field(LOGIN_FIELD_PASSWORD));
        assert!(is_sensitive_field(LOGIN_FIELD_TOKEN));
        assert!(is_sensitive_field("Access_Token"));
        assert!(!is_sensitive_field(LOGIN_FIELD_LOGIN));
        assert!(!is_sensitive_field("title"));
    }

    #[test]
    fn test_is_auth_header() {
        assert!(is_auth_header("Authorization"));
        assert!(is_auth_header("TRAKT-USER-TOKEN"));
        assert!(is_auth_header(HEADER_TRAKT_API_KEY));
        assert!(!is_auth_header(HEADER_TRAKT_API_VERSION));
        assert!(!is_auth_header(HEADER_CONTENT_TYPE));
    }
}
