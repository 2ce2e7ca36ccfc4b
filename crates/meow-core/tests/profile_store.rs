//! Profile persistence against a real temporary directory.

use meow_core::{AppRouter, AppState, ProfileStore, StorageError, UserProfile, Zodiac, PROFILE_KEY};

fn mimi() -> UserProfile {
    UserProfile {
        nickname: "Mimi".to_string(),
        zodiac: Zodiac::Leo,
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());

    store.save(&mimi()).unwrap();
    let loaded = store.load();

    assert_eq!(loaded, Some(mimi()));
}

#[test]
fn test_profile_file_uses_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    store.save(&mimi()).unwrap();

    let expected = dir.path().join(format!("{}.json", PROFILE_KEY));
    assert_eq!(store.path(), expected.as_path());
    let raw = std::fs::read_to_string(expected).unwrap();
    assert_eq!(raw, r#"{"nickname":"Mimi","zodiac":"Leo"}"#);
}

#[test]
fn test_missing_profile_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    assert!(store.load().is_none());
    assert!(matches!(store.try_load(), Ok(None)));
}

#[test]
fn test_corrupted_profile_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(store.try_load(), Err(StorageError::Corruption(_))));
    assert!(store.load().is_none());
}

#[test]
fn test_unknown_sign_in_file_is_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    std::fs::write(store.path(), r#"{"nickname":"Mimi","zodiac":"Ophiuchus"}"#).unwrap();

    assert!(matches!(store.try_load(), Err(StorageError::Corruption(_))));
}

#[test]
fn test_blank_nickname_in_file_is_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    std::fs::write(store.path(), r#"{"nickname":"   ","zodiac":"Leo"}"#).unwrap();

    assert!(matches!(store.try_load(), Err(StorageError::Corruption(_))));
    assert!(store.load().is_none());

    let mut router = AppRouter::new();
    assert_eq!(router.start(&store), AppState::Config);
    assert!(router.profile().is_none());
}

#[test]
fn test_save_creates_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(&dir.path().join("a").join("b"));
    store.save(&mimi()).unwrap();
    assert_eq!(store.load(), Some(mimi()));
}

#[test]
fn test_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    store.save(&mimi()).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_none());
    store.clear().unwrap();
}
