use crate::constants;
use crate::error::Error;
use crate::routes::ApiVersion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How the client identifies itself to the remote API.
///
/// The credential kind also selects the API version: an API key talks to
/// [`ApiVersion::V1`], an application client id to [`ApiVersion::V2`].
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Credentials {
    ApiKey {
        api_key: String,
    },
    Application {
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { .. } => f
                .debug_struct("ApiKey")
                .field("api_key", &constants::REDACTED)
                .finish(),
            Self::Application {
                client_id,
                redirect_uri,
                ..
            } => f
                .debug_struct("Application")
                .field("client_id", client_id)
                .field("client_secret", &constants::REDACTED)
                .field("redirect_uri", redirect_uri)
                .finish(),
        }
    }
}

/// Target host family.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Production,
    Staging,
}

/// Everything needed to construct a client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub credentials: Credentials,
    #[serde(default)]
    pub mode: Mode,
    /// Promotes request/response detail logging from `debug`/`trace` to `info`.
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_timeout_secs_value")]
    pub timeout_secs: u64,
    /// Compatibility opt-in: skip TLS certificate and hostname verification.
    #[serde(default)]
    pub insecure_skip_tls_verify: bool,
    /// Overrides the host chosen from version and mode.
    #[serde(default)]
    pub base_url: Option<String>,
}

const fn default_timeout_secs_value() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Legacy API-key configuration.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::ApiKey {
            api_key: api_key.into(),
        })
    }

    /// Application configuration for the session-login API.
    #[must_use]
    pub fn with_application(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            mode,
            ..Self::from_credentials(Credentials::Application {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                redirect_uri: redirect_uri.into(),
            })
        }
    }

    const fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            mode: Mode::Production,
            debug: false,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            insecure_skip_tls_verify: false,
            base_url: None,
        }
    }

    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Disables TLS verification. Only for servers that cannot present a valid certificate.
    #[must_use]
    pub const fn insecure_skip_tls_verify(mut self) -> Self {
        self.insecure_skip_tls_verify = true;
        self
    }

    /// Parses a TOML document such as:
    ///
    /// ```toml
    /// mode = "staging"
    /// timeout_secs = 20
    ///
    /// [credentials]
    /// api_key = "abc123"
    /// ```
    ///
    /// # Errors
    /// Returns an error if the document is not valid TOML or misses required keys.
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from `TRAKT_*` environment variables.
    ///
    /// `TRAKT_API_KEY` wins over `TRAKT_CLIENT_ID`; `TRAKT_ENV=staging` selects staging hosts.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when neither credential kind is present.
    pub fn from_env() -> Result<Self, Error> {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let config = if let Some(api_key) = env(constants::ENV_TRAKT_API_KEY) {
            Self::with_api_key(api_key)
        } else if let Some(client_id) = env(constants::ENV_TRAKT_CLIENT_ID) {
            Self::with_application(
                client_id,
                env(constants::ENV_TRAKT_CLIENT_SECRET).unwrap_or_default(),
                env(constants::ENV_TRAKT_REDIRECT_URI).unwrap_or_default(),
                Mode::Production,
            )
        } else {
            return Err(Error::Config(format!(
                "set {} or {}",
                constants::ENV_TRAKT_API_KEY,
                constants::ENV_TRAKT_CLIENT_ID
            )));
        };

        let mode = match env(constants::ENV_TRAKT_ENV).as_deref() {
            Some(value) if value.eq_ignore_ascii_case("staging") => Mode::Staging,
            _ => Mode::Production,
        };
        Ok(config.mode(mode))
    }

    /// Checks the configuration for values no client can work with.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        let empty_key = match &self.credentials {
            Credentials::ApiKey { api_key } => api_key.is_empty().then_some("api_key"),
            Credentials::Application { client_id, .. } => {
                client_id.is_empty().then_some("client_id")
            }
        };
        if let Some(key) = empty_key {
            return Err(Error::Config(format!("'{key}' must not be empty")));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("'timeout_secs' must be positive".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        match self.credentials {
            Credentials::ApiKey { .. } => ApiVersion::V1,
            Credentials::Application { .. } => ApiVersion::V2,
        }
    }

    /// The key embedded in request paths, for versions that do so.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        match &self.credentials {
            Credentials::ApiKey { api_key } => Some(api_key),
            Credentials::Application { .. } => None,
        }
    }

    /// The application id sent as a header, for versions that do so.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        match &self.credentials {
            Credentials::Application { client_id, .. } => Some(client_id),
            Credentials::ApiKey { .. } => None,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
