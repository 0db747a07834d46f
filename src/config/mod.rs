pub mod models;
pub mod url_resolver;

pub use models::{ClientConfig, Credentials, Mode};
pub use url_resolver::HostResolver;
