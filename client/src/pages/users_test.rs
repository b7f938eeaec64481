use super::*;

fn user(id: i64, email: &str, role: Role) -> User {
    User { id: Some(id), email: email.to_owned(), role }
}

#[test]
fn replace_user_swaps_matching_entry() {
    let mut list = vec![user(1, "o@hotel.test", Role::Owner), user(2, "m@hotel.test", Role::Manager)];
    replace_user(&mut list, user(2, "m2@hotel.test", Role::Receptionist));
    assert_eq!(list[1], user(2, "m2@hotel.test", Role::Receptionist));
    assert_eq!(list[0], user(1, "o@hotel.test", Role::Owner));
}

#[test]
fn replace_user_ignores_unknown_id() {
    let mut list = vec![user(1, "o@hotel.test", Role::Owner)];
    replace_user(&mut list, user(9, "x@hotel.test", Role::Manager));
    assert_eq!(list, vec![user(1, "o@hotel.test", Role::Owner)]);
}

#[test]
fn forbidden_gets_role_hint() {
    let err = ApiError::from_status(403, "", "Failed to delete user");
    assert_eq!(user_action_error(&err, "delete"), "Requires OWNER role to delete users.");
}

#[test]
fn other_errors_keep_backend_message() {
    let err = ApiError::from_status(409, r#"{"message":"Email taken"}"#, "Failed to update user");
    assert_eq!(user_action_error(&err, "update"), "Email taken");
}
