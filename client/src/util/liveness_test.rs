use super::*;

#[test]
fn starts_alive() {
    assert!(Liveness::new().is_alive());
}

#[test]
fn clones_observe_mark_gone() {
    let alive = Liveness::default();
    let task = alive.clone();
    alive.mark_gone();
    assert!(!task.is_alive());
}
