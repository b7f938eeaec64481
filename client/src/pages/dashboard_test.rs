use hotel::{Role, User};

use super::*;

fn reservation(id: i64, email: &str) -> Reservation {
    Reservation {
        id,
        guest_name: format!("Guest {id}"),
        guest_email: email.to_owned(),
        room_id: 1,
        check_in_date: "2025-03-01".to_owned(),
        check_out_date: "2025-03-02".to_owned(),
    }
}

#[test]
fn unique_guest_count_dedupes_by_email() {
    let list = vec![reservation(1, "a@mail.test"), reservation(2, "b@mail.test"), reservation(3, "a@mail.test")];
    assert_eq!(unique_guest_count(&list), 2);
    assert_eq!(unique_guest_count(&[]), 0);
}

#[test]
fn welcome_line_uses_identity_when_known() {
    let session = Session {
        user: Some(User { id: None, email: "o@hotel.test".into(), role: Role::Owner }),
        token: Some("t".into()),
        initialized: true,
    };
    assert_eq!(welcome_line(&session), "Welcome, o@hotel.test (OWNER)");
}

#[test]
fn welcome_line_for_rehydrated_session() {
    let session = Session { user: None, token: Some("abc123".into()), initialized: true };
    assert_eq!(welcome_line(&session), "Welcome back");
}
