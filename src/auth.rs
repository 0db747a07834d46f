//! Per-client credential and session state.
//!
//! For session-login API versions the context moves through
//! `NoCredentials -> CredentialsSet -> SessionEstablished`; the middle
//! transition happens lazily on the first request that needs a session.

use crate::constants;
use base64::{engine::general_purpose, Engine as _};
use std::fmt;

/// Observable authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    NoCredentials,
    CredentialsSet,
    SessionEstablished,
}

/// Credentials and cached session token applied to outgoing requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    username: Option<String>,
    secret: Option<String>,
    session_token: Option<String>,
}

impl AuthContext {
    /// Stores credentials and drops any cached session.
    pub fn set(&mut self, username: impl Into<String>, secret: impl Into<String>) {
        self.username = Some(username.into());
        self.secret = Some(secret.into());
        self.session_token = None;
    }

    /// Forgets credentials and session.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn state(&self) -> AuthState {
        match (&self.secret, &self.session_token) {
            (_, Some(_)) => AuthState::SessionEstablished,
            (Some(_), None) => AuthState::CredentialsSet,
            (None, None) => AuthState::NoCredentials,
        }
    }

    /// A secret is set but no session token has been obtained for it yet.
    #[must_use]
    pub const fn needs_login(&self) -> bool {
        self.secret.is_some() && self.session_token.is_none()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub(crate) fn establish_session(&mut self, token: String) {
        self.session_token = Some(token);
    }

    /// `Basic` header value for the stored credentials, if a secret is set.
    #[must_use]
    pub fn basic_authorization(&self) -> Option<String> {
        let secret = self.secret.as_deref()?;
        let username = self.username.as_deref().unwrap_or_default();
        let encoded = general_purpose::STANDARD.encode(format!("{username}:{secret}"));
        Some(format!("Basic {encoded}"))
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("username", &self.username)
            .field("secret", &self.secret.as_ref().map(|_| constants::REDACTED))
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| constants::REDACTED),
            )
            .finish()
    }
}
