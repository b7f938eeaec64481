use super::*;

#[test]
fn validate_login_trims_email_and_keeps_password() {
    let creds = validate_login("  a@b.com ", " x ").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " x ");
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "x").unwrap_err(), "Enter your email and password.");
    assert_eq!(validate_login("a@b.com", "").unwrap_err(), "Enter your email and password.");
}
