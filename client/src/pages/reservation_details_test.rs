use super::*;

fn details(check_in: Option<&str>, check_out: Option<&str>) -> ReservationDetails {
    ReservationDetails {
        guest_name: "Jo".into(),
        guest_email: None,
        room_number: "204".into(),
        price: 300.0,
        check_in_date: check_in.map(str::to_owned),
        check_out_date: check_out.map(str::to_owned),
    }
}

#[test]
fn stay_label_joins_dates() {
    assert_eq!(stay_label(&details(Some("2025-03-01"), Some("2025-03-04"))), "2025-03-01 to 2025-03-04");
}

#[test]
fn stay_label_without_dates() {
    assert_eq!(stay_label(&details(Some("2025-03-01"), None)), "Dates unavailable");
}
