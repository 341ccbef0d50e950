use super::*;
use crate::user::Role;

fn organizer() -> User {
    User {
        id: "u2".to_owned(),
        email: "club@usm.my".to_owned(),
        name: "Robotics Club".to_owned(),
        role: Role::Organizer,
        matric_number: None,
        organization_id: Some("org-7".to_owned()),
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.load().unwrap().is_none());
    assert_eq!(store.raw(), None);
}

#[test]
fn memory_store_save_then_load_returns_user() {
    let store = MemoryStore::new();
    store.save(&organizer()).unwrap();
    assert_eq!(store.load().unwrap(), Some(organizer()));
}

#[test]
fn memory_store_malformed_value_is_corrupt() {
    let store = MemoryStore::with_raw("{not json");
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    // Loading never discards; that is the caller's decision.
    assert_eq!(store.raw().as_deref(), Some("{not json"));
}

#[test]
fn memory_store_wrong_shape_is_corrupt() {
    let store = MemoryStore::with_raw(r#"{"id":"u1","role":"wizard"}"#);
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryStore::new();
    store.save(&organizer()).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.raw(), None);
}

#[test]
fn store_reference_delegates() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.save(&organizer()).unwrap();
    assert!(store.load().unwrap().is_some());
}

// =============================================================================
// FileStore
// =============================================================================

#[test]
fn file_store_missing_file_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::in_dir(dir.path()).save(&organizer()).unwrap();

    let reopened = FileStore::in_dir(dir.path());
    assert_eq!(reopened.load().unwrap(), Some(organizer()));
    assert!(reopened.path().ends_with("myevent_user.json"));
}

#[test]
fn file_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("session.json"));
    store.save(&organizer()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn file_store_garbage_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), "\u{0}\u{1}garbage").unwrap();
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
}

#[test]
fn file_store_clear_removes_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    store.save(&organizer()).unwrap();
    store.clear().unwrap();
    assert!(!store.path().exists());
    store.clear().unwrap();
}
