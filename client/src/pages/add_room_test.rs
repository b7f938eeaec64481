use super::*;

#[test]
fn parse_room_form_builds_payload() {
    let room = parse_room_form(" 301 ", "SUITE", "249.99", false).unwrap();
    assert_eq!(room.room_number, "301");
    assert_eq!(room.kind, "SUITE");
    assert!((room.price - 249.99).abs() < f64::EPSILON);
    assert!(!room.available);
}

#[test]
fn parse_room_form_requires_number_and_price() {
    assert_eq!(parse_room_form("", "SINGLE", "80", true).unwrap_err(), "Room number is required.");
    assert_eq!(parse_room_form("101", "SINGLE", "", true).unwrap_err(), "Enter a price per night.");
    assert_eq!(parse_room_form("101", "SINGLE", "-5", true).unwrap_err(), "Price cannot be negative.");
}
