use serde_json::json;
use trakt_dispatch::{ApiVersion, Error};

#[test]
fn test_json_error_display() {
    let json_err = serde_json::from_str::<serde_json::Value>("{\"key\": ").unwrap_err();
    let err = Error::Json(json_err);
    assert!(format!("{err}").starts_with("JSON error: "));
}

#[test]
fn test_toml_error_display() {
    let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
    let err = Error::Toml(toml_err);
    assert!(format!("{err}").starts_with("TOML parsing error: "));
}

#[test]
fn test_config_error_display() {
    let err = Error::Config("'api_key' must not be empty".to_string());
    assert_eq!(
        format!("{err}"),
        "Configuration error: 'api_key' must not be empty"
    );
}

#[test]
fn test_unknown_method_to_json() {
    let err = Error::UnknownMethod {
        method: "showFooBar".to_string(),
        path: "/show/foo/bar.json/".to_string(),
    };
    let json_error = err.to_json();

    assert_eq!(json_error.error_type, "UnknownMethod");
    assert_eq!(
        json_error.message,
        "Unknown method 'showFooBar' (no route registered at '/show/foo/bar.json/')"
    );
    assert!(json_error.context.is_some());

    let rendered = serde_json::to_value(&json_error).unwrap();
    assert_eq!(rendered["error_type"], json!("UnknownMethod"));
}

#[test]
fn test_invalid_header_value_maps_to_configuration() {
    let err = Error::InvalidHeaderValue {
        name: "trakt-api-key".to_string(),
        reason: "failed to parse header value".to_string(),
    };
    assert_eq!(err.to_json().error_type, "Configuration");
}

#[test]
fn test_bundled_route_tables_are_valid() {
    let v1 = ApiVersion::V1.registry().unwrap();
    let v2 = ApiVersion::V2.registry().unwrap();

    assert!(v1.len() > 100);
    assert!(v2.len() > 50);
    assert!(v1.get("/show/season.json/").is_some());
    assert!(v2.get("/auth/login").is_some());
}
