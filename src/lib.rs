//! Route-table driven client for the Trakt REST API.
//!
//! A call name such as `showSeasonSummary` is resolved to a registered
//! route, its positional arguments are bound to path segments or body
//! fields, and the single HTTP exchange is classified into an [`Outcome`].

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod invocation;
pub mod logging;
pub mod response;
pub mod routes;
pub mod transport;

pub use auth::{AuthContext, AuthState};
pub use client::Client;
pub use config::{ClientConfig, Credentials, Mode};
pub use error::Error;
pub use invocation::{Diagnostics, Outcome, PreparedRequest, RawResponse};
pub use routes::ApiVersion;
pub use transport::{HttpTransport, Transport, TransportError, TransportErrorKind};
