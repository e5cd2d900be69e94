use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:8057/api/v1");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn blank_override_falls_back_to_default() {
    assert_eq!(ClientConfig::with_base_url(Some("   ")), ClientConfig::default());
    assert_eq!(ClientConfig::with_base_url(None), ClientConfig::default());
}

#[test]
fn override_replaces_base_url_only() {
    let config = ClientConfig::with_base_url(Some("https://api.example.com/v2"));
    assert_eq!(config.api_base_url, "https://api.example.com/v2");
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig { api_base_url: "http://host/api/v1/".to_owned(), ..ClientConfig::default() };
    assert_eq!(config.endpoint("/auth/me"), "http://host/api/v1/auth/me");
    assert_eq!(config.endpoint("auth/me"), "http://host/api/v1/auth/me");
}
