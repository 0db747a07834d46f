use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::constants;
use crate::engine::binder::BoundArguments;
use crate::error::Error;
use crate::invocation::PreparedRequest;
use crate::routes::{ApiVersion, RouteDescriptor};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{Map, Value};

/// Assembles requests for one client: host, version conventions and credentials.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    host: &'a str,
    config: &'a ClientConfig,
}

impl<'a> RequestBuilder<'a> {
    #[must_use]
    pub const fn new(host: &'a str, config: &'a ClientConfig) -> Self {
        Self { host, config }
    }

    const fn version(&self) -> ApiVersion {
        self.config.api_version()
    }

    /// Builds the request for a bound route.
    ///
    /// # Errors
    /// Returns an error if a credential cannot be encoded as a header value
    /// or the body fails to serialize.
    pub fn build(
        &self,
        route: &RouteDescriptor,
        bound: BoundArguments,
        auth: &AuthContext,
    ) -> Result<PreparedRequest, Error> {
        let url = self.build_url(route.path(), &bound.path_suffix());
        let (_, body) = bound.into_parts();
        let body = body.map(|value| serde_json::to_string(&value)).transpose()?;
        let headers = self.build_headers(auth, body.is_some())?;

        Ok(PreparedRequest {
            method: route.http_method(),
            url,
            headers,
            body,
        })
    }

    /// Builds the session login exchange for the stored credentials.
    ///
    /// # Errors
    /// Returns an error if the client id cannot be encoded as a header value.
    pub fn build_login(&self, auth: &AuthContext) -> Result<PreparedRequest, Error> {
        let mut body = Map::new();
        body.insert(
            constants::LOGIN_FIELD_LOGIN.to_string(),
            Value::from(auth.username().unwrap_or_default()),
        );
        body.insert(
            constants::LOGIN_FIELD_PASSWORD.to_string(),
            Value::from(auth.secret().unwrap_or_default()),
        );
        // The login call itself never carries a session.
        let headers = self.build_headers(&AuthContext::default(), true)?;

        Ok(PreparedRequest {
            method: Method::POST,
            url: format!("{}{}", self.host, constants::V2_LOGIN_PATH),
            headers,
            body: Some(Value::Object(body).to_string()),
        })
    }

    /// host + canonical path + key segment (legacy) + bound suffix, trailing
    /// separators trimmed.
    fn build_url(&self, path: &str, suffix: &str) -> String {
        let mut url = format!(
            "{}{}",
            self.host,
            path.trim_end_matches(constants::PATH_SEPARATOR)
        );

        if self.version().embeds_key_in_path() {
            if let Some(key) = self.config.api_key() {
                url.push(constants::PATH_SEPARATOR);
                url.push_str(key);
            }
        }

        if !suffix.is_empty() {
            url.push(constants::PATH_SEPARATOR);
            url.push_str(suffix);
        }

        url.trim_end_matches(constants::PATH_SEPARATOR).to_string()
    }

    fn build_headers(&self, auth: &AuthContext, has_body: bool) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            constants::HEADER_USER_AGENT,
            HeaderValue::from_static(constants::USER_AGENT),
        );
        headers.insert(
            constants::HEADER_ACCEPT,
            HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
        );

        match self.version() {
            ApiVersion::V1 => {
                if has_body {
                    headers.insert(
                        constants::HEADER_CONTENT_TYPE,
                        HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
                    );
                }
                if let Some(basic) = auth.basic_authorization() {
                    insert_header(&mut headers, constants::HEADER_AUTHORIZATION, &basic)?;
                }
            }
            ApiVersion::V2 => {
                headers.insert(
                    constants::HEADER_CONTENT_TYPE,
                    HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
                );
                headers.insert(
                    constants::HEADER_TRAKT_API_VERSION,
                    HeaderValue::from_static(constants::TRAKT_API_VERSION_2),
                );
                if let Some(client_id) = self.config.client_id() {
                    insert_header(&mut headers, constants::HEADER_TRAKT_API_KEY, client_id)?;
                }
                if let Some(token) = auth.session_token() {
                    insert_header(
                        &mut headers,
                        constants::HEADER_TRAKT_USER_LOGIN,
                        auth.username().unwrap_or_default(),
                    )?;
                    insert_header(&mut headers, constants::HEADER_TRAKT_USER_TOKEN, token)?;
                }
            }
        }

        Ok(headers)
    }
}

/// Inserts a header, rejecting values with control characters
fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), Error> {
    if value.chars().any(|c| c == '\r' || c == '\n' || c == '\0') {
        return Err(Error::invalid_header_value(
            name,
            "Header value contains invalid control characters (newline, carriage return, or null)",
        ));
    }
    let header_value =
        HeaderValue::from_str(value).map_err(|e| Error::invalid_header_value(name, e))?;
    headers.insert(name, header_value);
    Ok(())
}

/// Extracts the session token from a login response.
#[must_use]
pub fn session_token(payload: &Value) -> Option<String> {
    payload
        .get(constants::LOGIN_FIELD_TOKEN)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
