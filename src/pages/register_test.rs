use super::*;

#[test]
fn validate_register_input_trims_fields() {
    let request = validate_register_input(" a@b.com ", "  writer ", "secret1").unwrap();
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.username, "writer");
    assert_eq!(request.password, "secret1");
}

#[test]
fn validate_register_input_rejects_bad_email() {
    assert_eq!(validate_register_input("nope", "writer", "secret1"), Err("Enter a valid email address."));
}

#[test]
fn validate_register_input_enforces_username_length() {
    assert_eq!(validate_register_input("a@b.com", "w", "secret1"), Err("Usernames are 2-50 characters."));
    let long = "w".repeat(51);
    assert_eq!(validate_register_input("a@b.com", &long, "secret1"), Err("Usernames are 2-50 characters."));
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(validate_register_input("a@b.com", "writer", "12345"), Err("Passwords need at least 6 characters."));
}

#[test]
fn validate_activation_code_requires_six_digits() {
    assert!(validate_activation_code("a@b.com", " 123456 ").is_ok());
    assert_eq!(validate_activation_code("a@b.com", "12345"), Err("Enter the 6-digit code from your email."));
    assert_eq!(validate_activation_code("a@b.com", "12a456"), Err("Enter the 6-digit code from your email."));
}
