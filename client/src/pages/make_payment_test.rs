use super::*;

fn receipt(message: Option<&str>, processed_by: Option<&str>) -> PaymentReceipt {
    PaymentReceipt {
        payment_id: Some(3),
        reservation_id: 12,
        guest_name: "Jo".into(),
        amount: 300.0,
        status: "PAID".into(),
        processed_by: processed_by.map(str::to_owned),
        message: message.map(str::to_owned),
    }
}

#[test]
fn parse_reservation_id_accepts_positive_integers() {
    assert_eq!(parse_reservation_id(" 42 "), Ok(42));
}

#[test]
fn parse_reservation_id_rejects_garbage() {
    assert!(parse_reservation_id("").is_err());
    assert!(parse_reservation_id("0").is_err());
    assert!(parse_reservation_id("-3").is_err());
    assert!(parse_reservation_id("12a").is_err());
}

#[test]
fn receipt_summary_names_actor_from_message() {
    let r = receipt(Some("Payment processed by RECEPTIONIST desk@hotel.test"), None);
    assert_eq!(receipt_summary(&r), "Payment processed by RECEPTIONIST desk@hotel.test");
}

#[test]
fn receipt_summary_without_actor() {
    assert_eq!(receipt_summary(&receipt(None, None)), "Payment processed successfully!");
}
