use super::*;

#[test]
fn placeholder_is_neutral_while_pending() {
    assert_eq!(placeholder_text(RouteDecision::Pending), "Loading...");
}

#[test]
fn placeholder_announces_redirect() {
    assert_eq!(placeholder_text(RouteDecision::Redirect("/login")), "Redirecting to login...");
    assert_eq!(placeholder_text(RouteDecision::Allow), "");
}
