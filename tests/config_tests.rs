use trakt_dispatch::config::HostResolver;
use trakt_dispatch::{ApiVersion, ClientConfig, Credentials, Error, Mode};

#[test]
fn test_full_toml_document() {
    let config = ClientConfig::from_toml_str(
        r#"
        mode = "staging"
        debug = true
        timeout_secs = 15
        insecure_skip_tls_verify = true
        base_url = "http://localhost:8080/"

        [credentials]
        client_id = "cid"
        client_secret = "secret"
        redirect_uri = "urn:ietf:wg:oauth:2.0:oob"
        "#,
    )
    .unwrap();

    assert_eq!(config.api_version(), ApiVersion::V2);
    assert!(matches!(config.credentials, Credentials::Application { .. }));
    assert!(config.insecure_skip_tls_verify);
    assert_eq!(
        HostResolver::new(&config).resolve(),
        "http://localhost:8080"
    );
}

#[test]
fn test_zero_timeout_rejected() {
    let err = ClientConfig::from_toml_str(
        r#"
        timeout_secs = 0

        [credentials]
        api_key = "k"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_unknown_mode_rejected() {
    let err = ClientConfig::from_toml_str(
        r#"
        mode = "sandbox"

        [credentials]
        api_key = "k"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_host_priority() {
    let config = ClientConfig::with_api_key("k").mode(Mode::Staging);

    let resolver = HostResolver::new(&config).with_env_override(None);
    assert_eq!(resolver.resolve(), "http://api-staging.trakt.tv");

    let resolver =
        HostResolver::new(&config).with_env_override(Some("http://env.example/".to_string()));
    assert_eq!(resolver.resolve(), "http://env.example");

    let config = config.base_url("http://explicit.example");
    let resolver =
        HostResolver::new(&config).with_env_override(Some("http://env.example".to_string()));
    assert_eq!(resolver.resolve(), "http://explicit.example");
}

// The only test in this binary that touches TRAKT_* variables.
#[test]
fn test_from_env() {
    std::env::remove_var("TRAKT_API_KEY");
    std::env::remove_var("TRAKT_CLIENT_ID");
    assert!(matches!(ClientConfig::from_env(), Err(Error::Config(_))));

    std::env::set_var("TRAKT_CLIENT_ID", "cid");
    std::env::set_var("TRAKT_CLIENT_SECRET", "secret");
    std::env::set_var("TRAKT_ENV", "staging");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_version(), ApiVersion::V2);
    assert_eq!(config.client_id(), Some("cid"));
    assert_eq!(config.mode, Mode::Staging);

    std::env::set_var("TRAKT_API_KEY", "key");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_version(), ApiVersion::V1);
    assert_eq!(config.api_key(), Some("key"));

    for name in ["TRAKT_API_KEY", "TRAKT_CLIENT_ID", "TRAKT_CLIENT_SECRET", "TRAKT_ENV"] {
        std::env::remove_var(name);
    }
}
