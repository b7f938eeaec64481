use super::*;

#[test]
fn validate_registration_parses_role() {
    let req = validate_registration(" new@hotel.test ", "pw", "MANAGER").unwrap();
    assert_eq!(req.email, "new@hotel.test");
    assert_eq!(req.role, Role::Manager);
}

#[test]
fn validate_registration_rejects_blank_fields() {
    assert_eq!(validate_registration("", "pw", "OWNER").unwrap_err(), "Enter an email and a password.");
    assert_eq!(validate_registration("a@b.com", "", "OWNER").unwrap_err(), "Enter an email and a password.");
}

#[test]
fn validate_registration_rejects_unknown_role() {
    assert_eq!(validate_registration("a@b.com", "pw", "JANITOR").unwrap_err(), "Choose a role.");
}
