use super::*;

#[test]
fn default_points_at_local_gateway() {
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://api.hotel.test///").unwrap();
    assert_eq!(cfg.base_url(), "https://api.hotel.test");
}

#[test]
fn new_rejects_missing_scheme() {
    assert_eq!(
        ApiConfig::new("api.hotel.test"),
        Err(ConfigError::InvalidBaseUrl("api.hotel.test".to_owned()))
    );
    assert!(ApiConfig::new("http://").is_err());
}

#[test]
fn from_value_defaults_when_absent_or_blank() {
    assert_eq!(ApiConfig::from_value(None).unwrap(), ApiConfig::default());
    assert_eq!(ApiConfig::from_value(Some("  ")).unwrap(), ApiConfig::default());
}

#[test]
fn from_value_validates_present_value() {
    assert!(ApiConfig::from_value(Some("ftp://x")).is_err());
    assert_eq!(
        ApiConfig::from_value(Some("http://10.0.0.2:9000")).unwrap().base_url(),
        "http://10.0.0.2:9000"
    );
}

#[test]
fn url_joins_path_with_single_slash() {
    let cfg = ApiConfig::new("http://localhost:8080/").unwrap();
    assert_eq!(cfg.url("/auth/login"), "http://localhost:8080/auth/login");
    assert_eq!(cfg.url("auth/login"), "http://localhost:8080/auth/login");
}
