use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::default().load().unwrap(), None);
}

#[test]
fn clones_share_the_slot() {
    let store = MemoryStore::default();
    let view = store.clone();
    store.save("t1").unwrap();
    assert_eq!(view.peek().as_deref(), Some("t1"));
    view.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn clear_on_empty_slot_succeeds() {
    let store = MemoryStore::default();
    assert!(store.clear().is_ok());
    assert!(store.clear().is_ok());
}

#[test]
fn save_overwrites_previous_token() {
    let store = MemoryStore::with_token("old");
    store.save("new").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("new"));
}
