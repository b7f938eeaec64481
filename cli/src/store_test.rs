use super::*;

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn missing_file_is_empty_slot() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(store_in(&dir).load().unwrap(), None);
}

#[test]
fn save_creates_parent_and_load_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("abc").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, r#"{"token":"abc"}"#);
}

#[test]
fn clear_removes_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("abc").unwrap();
    store.clear().unwrap();
    assert!(!store.path().exists());
    store.clear().unwrap();
}

#[test]
fn garbage_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").unwrap();
    let err = FileStore::new(path).load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));
}

#[cfg(unix)]
#[test]
fn saved_token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("secret").unwrap();
    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn resave_tightens_loose_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"token":"old"}"#).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    let store = FileStore::new(path.clone());
    store.save("new").unwrap();
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o600);
    assert_eq!(store.load().unwrap().as_deref(), Some("new"));
}
