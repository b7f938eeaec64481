use super::*;

#[test]
fn only_owner_manages_users_and_staff() {
    for action in [Action::ManageUsers, Action::ManageStaff] {
        assert!(permits(Role::Owner, action));
        assert!(!permits(Role::Manager, action));
        assert!(!permits(Role::Receptionist, action));
    }
}

#[test]
fn owner_and_manager_manage_inventory() {
    assert!(permits(Role::Owner, Action::ManageInventory));
    assert!(permits(Role::Manager, Action::ManageInventory));
    assert!(!permits(Role::Receptionist, Action::ManageInventory));
}

#[test]
fn every_role_books_and_takes_payment() {
    for role in Role::ALL {
        assert!(permits(role, Action::BookRoom));
        assert!(permits(role, Action::TakePayment));
        assert!(permits(role, Action::ViewReservationDetails));
    }
}

#[test]
fn unknown_role_is_offered_nothing() {
    assert!(!offers(None, Action::BookRoom));
    assert!(offers(Some(Role::Receptionist), Action::BookRoom));
}

#[test]
fn require_returns_denied_with_message() {
    assert_eq!(require(Role::Owner, Action::ManageUsers), Ok(()));
    assert_eq!(
        require(Role::Manager, Action::ManageUsers),
        Err(ApiError::Denied("Only OWNER can manage users".to_owned()))
    );
}
