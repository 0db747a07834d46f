//! The public entry point: resolve, bind, authenticate, send, classify.

use crate::auth::{AuthContext, AuthState};
use crate::config::{ClientConfig, HostResolver};
use crate::constants;
use crate::engine::binder::bind;
use crate::engine::executor::{session_token, RequestBuilder};
use crate::engine::resolver::resolve;
use crate::error::Error;
use crate::invocation::{Diagnostics, Outcome, PreparedRequest};
use crate::logging;
use crate::response;
use crate::routes::{ApiVersion, RouteDescriptor, RouteRegistry};
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;
use std::sync::PoisonError;
use std::time::Instant;
use tracing::{debug, warn};

/// Result of making sure a session exists before a call.
enum Session {
    Ready(AuthContext),
    Failed(Outcome),
}

/// A Trakt API client bound to one API version.
///
/// Calls are dispatched by name through the version's route table:
///
/// ```no_run
/// # async fn demo() -> Result<(), trakt_dispatch::Error> {
/// use serde_json::json;
/// use trakt_dispatch::{Client, ClientConfig};
///
/// let client = Client::new(ClientConfig::with_api_key("abc123"))?;
/// let outcome = client.call("showSummary", &[json!("The Walking Dead")]).await?;
/// if let Some(show) = outcome.data() {
///     println!("{}", show["title"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<T: Transport = HttpTransport> {
    config: ClientConfig,
    registry: &'static RouteRegistry,
    host: String,
    transport: T,
    auth: tokio::sync::Mutex<AuthContext>,
    diagnostics: std::sync::Mutex<Diagnostics>,
    max_body_len: usize,
}

impl Client<HttpTransport> {
    /// Creates a client backed by [`HttpTransport`].
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends through `transport`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the route table
    /// for its API version is malformed.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, Error> {
        config.validate()?;
        let registry = config.api_version().registry()?;
        let host = HostResolver::new(&config).resolve();
        debug!(
            target: "trakt_dispatch::client",
            "Client ready: {} at {} ({} routes)",
            config.api_version(),
            host,
            registry.len()
        );

        Ok(Self {
            config,
            registry,
            host,
            transport,
            auth: tokio::sync::Mutex::new(AuthContext::default()),
            diagnostics: std::sync::Mutex::new(Diagnostics::default()),
            max_body_len: logging::get_max_body_len(),
        })
    }

    /// Invokes the route named by `method`, e.g. `"showSeasonSummary"`.
    ///
    /// Remote and transport failures come back as [`Outcome`] variants; the
    /// error channel is reserved for unknown methods and request assembly.
    ///
    /// # Errors
    /// Returns [`Error::UnknownMethod`] without touching the network when no
    /// route matches.
    pub async fn call(&self, method: &str, args: &[Value]) -> Result<Outcome, Error> {
        let route = resolve(self.registry, method)?;
        self.dispatch(route, args).await
    }

    /// Invokes a route by its registry key, e.g. `"/show/summary.json/"`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownMethod`] when `path` is not registered.
    pub async fn call_route(&self, path: &str, args: &[Value]) -> Result<Outcome, Error> {
        let route = self
            .registry
            .get(path)
            .ok_or_else(|| Error::unknown_method(path, path))?;
        self.dispatch(route, args).await
    }

    /// Like [`Client::call`], collapsed to payload or nothing.
    ///
    /// # Errors
    /// Same as [`Client::call`].
    pub async fn fetch(&self, method: &str, args: &[Value]) -> Result<Option<Value>, Error> {
        Ok(self.call(method, args).await?.into_data())
    }

    /// Builds the request `call` would send, without sending it or logging in.
    ///
    /// # Errors
    /// Same as [`Client::call`].
    pub async fn prepare(&self, method: &str, args: &[Value]) -> Result<PreparedRequest, Error> {
        let route = resolve(self.registry, method)?;
        let auth = self.auth.lock().await.clone();
        self.builder().build(route, bind(route, args), &auth)
    }

    /// Stores credentials. Any cached session is dropped; the next call on a
    /// session-login version logs in again.
    pub async fn set_auth(&self, username: impl Into<String>, secret: impl Into<String>) {
        self.auth.lock().await.set(username, secret);
    }

    pub async fn clear_auth(&self) {
        self.auth.lock().await.clear();
    }

    pub async fn auth_state(&self) -> AuthState {
        self.auth.lock().await.state()
    }

    /// Details of the most recent exchange.
    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.registry.version()
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Registered route keys, sorted.
    #[must_use]
    pub fn routes(&self) -> Vec<&'static str> {
        self.registry.paths()
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.host, &self.config)
    }

    async fn dispatch(&self, route: &RouteDescriptor, args: &[Value]) -> Result<Outcome, Error> {
        let bound = bind(route, args);
        let auth = match self.session().await? {
            Session::Ready(auth) => auth,
            Session::Failed(outcome) => return Ok(outcome),
        };
        let request = self.builder().build(route, bound, &auth)?;
        Ok(self.exchange(&request).await)
    }

    /// Returns the auth context to apply, logging in first when credentials
    /// are set but no session exists. The lock is held across the login.
    async fn session(&self) -> Result<Session, Error> {
        let mut auth = self.auth.lock().await;
        if !(self.version().uses_session_login() && auth.needs_login()) {
            return Ok(Session::Ready(auth.clone()));
        }

        debug!(
            target: "trakt_dispatch::auth",
            "Logging in as '{}'",
            auth.username().unwrap_or_default()
        );
        let request = self.builder().build_login(&auth)?;
        match self.exchange(&request).await {
            Outcome::Success(payload) => {
                if let Some(token) = session_token(&payload) {
                    auth.establish_session(token);
                    debug!(target: "trakt_dispatch::auth", "Session established");
                    Ok(Session::Ready(auth.clone()))
                } else {
                    warn!(target: "trakt_dispatch::auth", "{}", constants::MSG_LOGIN_NO_TOKEN);
                    let outcome = Outcome::EmptyOrMalformed {
                        reason: constants::MSG_LOGIN_NO_TOKEN.to_string(),
                    };
                    self.update_diagnostics(|diagnostics| {
                        diagnostics.last_error_message = outcome.error_message().map(str::to_string);
                    });
                    Ok(Session::Failed(outcome))
                }
            }
            failure => {
                warn!(
                    target: "trakt_dispatch::auth",
                    "Login failed: {}",
                    failure.error_message().unwrap_or_default()
                );
                Ok(Session::Failed(failure))
            }
        }
    }

    /// One round trip: log, send, classify, record.
    async fn exchange(&self, request: &PreparedRequest) -> Outcome {
        let verbose = self.config.debug;
        logging::log_request(
            request.method.as_str(),
            &logging::redact_url(&request.url, self.config.api_key()),
            &request.headers,
            request.body.as_deref(),
            verbose,
        );

        let start = Instant::now();
        let result = self.transport.send(request).await;
        let status = match &result {
            Ok(raw) => {
                logging::log_response(
                    raw.status,
                    start.elapsed().as_millis(),
                    &raw.body,
                    self.max_body_len,
                    verbose,
                );
                Some(raw.status)
            }
            Err(error) => {
                warn!(
                    target: "trakt_dispatch::executor",
                    "Request failed (code {}): {}",
                    error.code(),
                    error
                );
                None
            }
        };

        let outcome = response::normalize(result, self.version().rejects_empty_payload());
        match &outcome {
            Outcome::ApiFailure { message } => {
                warn!(target: "trakt_dispatch::executor", "API failure: {message}");
            }
            Outcome::EmptyOrMalformed { reason } => {
                debug!(target: "trakt_dispatch::executor", "{reason}");
            }
            Outcome::Success(_) | Outcome::TransportFailure { .. } => {}
        }

        self.update_diagnostics(|diagnostics| {
            *diagnostics = Diagnostics {
                last_url: Some(request.url.clone()),
                last_status: status,
                last_error_code: outcome.error_code(),
                last_error_message: outcome.error_message().map(str::to_string),
            };
        });
        outcome
    }

    fn update_diagnostics(&self, update: impl FnOnce(&mut Diagnostics)) {
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut diagnostics);
    }
}
