use super::*;

#[test]
fn nightly_rate_formats_two_decimals() {
    assert_eq!(nightly_rate(80.0), "₹80.00 / night");
    assert_eq!(nightly_rate(1249.5), "₹1249.50 / night");
}

#[test]
fn booking_request_trims_guest_fields() {
    let req = booking_request(" Jo ", " jo@mail.test ", 4, "2025-03-01", "2025-03-03").unwrap();
    assert_eq!(req.guest_name, "Jo");
    assert_eq!(req.guest_email, "jo@mail.test");
    assert_eq!(req.room_id, 4);
}

#[test]
fn booking_request_requires_guest() {
    assert_eq!(
        booking_request("", "jo@mail.test", 4, "2025-03-01", "2025-03-03").unwrap_err(),
        "Enter the guest's name and email."
    );
}

#[test]
fn booking_request_checks_stay_order() {
    assert_eq!(
        booking_request("Jo", "jo@mail.test", 4, "2025-03-03", "2025-03-01").unwrap_err(),
        "Check-out must be after check-in."
    );
}
