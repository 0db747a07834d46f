use crate::config::models::{ClientConfig, Mode};
use crate::constants;
use crate::routes::ApiVersion;

/// Resolves the host a client sends requests to, based on a priority hierarchy
pub struct HostResolver<'a> {
    /// The client configuration
    config: &'a ClientConfig,
    /// Override from the environment (from `TRAKT_BASE_URL`)
    env_override: Option<String>,
}

impl<'a> HostResolver<'a> {
    /// Creates a new resolver for the given configuration
    pub fn new(config: &'a ClientConfig) -> Self {
        Self {
            config,
            env_override: std::env::var(constants::ENV_TRAKT_BASE_URL)
                .ok()
                .filter(|url| !url.is_empty()),
        }
    }

    /// Sets the environment override explicitly (replaces `TRAKT_BASE_URL`)
    #[must_use]
    pub fn with_env_override(mut self, url: Option<String>) -> Self {
        self.env_override = url;
        self
    }

    /// Resolves the host according to the priority hierarchy:
    /// 1. Explicit `base_url` in the configuration
    /// 2. Environment variable: `TRAKT_BASE_URL`
    /// 3. Version and mode default
    ///
    /// Trailing separators are stripped.
    #[must_use]
    pub fn resolve(&self) -> String {
        let host = self
            .config
            .base_url
            .as_deref()
            .or(self.env_override.as_deref())
            .unwrap_or_else(|| default_host(self.config.api_version(), self.config.mode));
        host.trim_end_matches(constants::PATH_SEPARATOR).to_string()
    }
}

/// The published host for a version and mode.
#[must_use]
pub const fn default_host(version: ApiVersion, mode: Mode) -> &'static str {
    match (version, mode) {
        (ApiVersion::V1, Mode::Production) => constants::V1_PRODUCTION_HOST,
        (ApiVersion::V1, Mode::Staging) => constants::V1_STAGING_HOST,
        (ApiVersion::V2, Mode::Production) => constants::V2_PRODUCTION_HOST,
        (ApiVersion::V2, Mode::Staging) => constants::V2_STAGING_HOST,
    }
}
