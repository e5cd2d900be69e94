use super::*;

#[test]
fn validate_login_input_trims_username() {
    let form = validate_login_input("  reader@example.com ", "secret").unwrap();
    assert_eq!(form.username, "reader@example.com");
    assert_eq!(form.password, "secret");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your username or email and password."));
    assert_eq!(validate_login_input("reader", ""), Err("Enter your username or email and password."));
}

#[test]
fn post_login_target_returns_to_local_redirect() {
    assert_eq!(post_login_target(Some("/settings?tab=profile")), "/settings?tab=profile");
}

#[test]
fn post_login_target_defaults_home() {
    assert_eq!(post_login_target(None), "/");
    assert_eq!(post_login_target(Some("https://evil.example")), "/");
    assert_eq!(post_login_target(Some("//evil.example")), "/");
}
