use super::*;

#[test]
fn resolve_config_defaults_when_unset() {
    assert_eq!(resolve_config(None), ApiConfig::default());
}

#[test]
fn resolve_config_falls_back_on_malformed_value() {
    assert_eq!(resolve_config(Some("gateway:8080")), ApiConfig::default());
}

#[test]
fn resolve_config_accepts_explicit_url() {
    assert_eq!(resolve_config(Some("https://desk.hotel.test/")).base_url(), "https://desk.hotel.test");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_reports_not_available() {
    let creds = Credentials { email: "a@b.com".into(), password: "x".into() };
    assert_eq!(BrowserAuthApi.login(&creds).await, Err(ApiError::NotAvailable));
    assert_eq!(execute_unit(endpoints::list_items()).await, Err(ApiError::NotAvailable));
}
