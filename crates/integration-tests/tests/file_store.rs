//! Persistence through the file-backed store.

#![allow(clippy::unwrap_used)]

use artisan_connect_directory::db::keys;
use artisan_connect_directory::store::{FileStore, KeyValueStore};
use artisan_connect_directory::{AppState, DirectoryConfig};
use tempfile::TempDir;

use artisan_connect_integration_tests::{data_dir, registration, secret};

fn open(dir: &TempDir) -> AppState {
    AppState::open(DirectoryConfig {
        data_dir: dir.path().to_path_buf(),
        ..DirectoryConfig::default()
    })
    .unwrap()
}

#[test]
fn test_state_survives_reopen() {
    let dir = data_dir();

    let artisan_id = {
        let state = open(&dir);
        let artisan = state
            .auth()
            .register(registration("Acme Co", "secret123"))
            .unwrap();
        state.auth().login("Acme Co", &secret("secret123")).unwrap();
        state
            .directory()
            .submit_review(artisan.id.clone(), "Ada", "Sturdy shelves")
            .unwrap();
        artisan.id
    };

    let state = open(&dir);
    let artisans = state.directory().list_artisans().unwrap();
    assert_eq!(artisans.len(), 1);
    assert_eq!(
        state.auth().current_user().unwrap().map(|u| u.id),
        Some(artisan_id.clone())
    );
    let reviews = state.directory().list_reviews(Some(&artisan_id)).unwrap();
    assert_eq!(reviews.len(), 1);

    // Login still works against the persisted hash.
    assert!(state.auth().login("Acme Co", &secret("secret123")).is_ok());
}

#[test]
fn test_slots_are_plain_json_files() {
    let dir = data_dir();
    let state = open(&dir);
    state
        .auth()
        .register(registration("Acme Co", "secret123"))
        .unwrap();

    let raw =
        std::fs::read_to_string(dir.path().join(format!("{}.json", keys::ARTISANS))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = value.as_array().unwrap().first().unwrap();
    assert_eq!(first["businessName"], "Acme Co");
    assert_eq!(first["specialization"], "Carpenter");
    assert_eq!(first["portfolioImages"].as_array().unwrap().len(), 2);
    assert!(!raw.contains("secret123"));
}

#[test]
fn test_reads_data_written_by_another_writer() {
    let dir = data_dir();
    let store = FileStore::open(dir.path()).unwrap();
    store
        .set(
            keys::REVIEWS,
            r#"[{"id":"1712345678901","artisanId":"1712345600000","author":"Ada","comment":"Great","timestamp":1712345678901}]"#,
        )
        .unwrap();

    let state = open(&dir);
    let reviews = state.directory().list_reviews(None).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews.first().unwrap().author, "Ada");
    assert!(state.directory().list_artisans().unwrap().is_empty());
    assert!(state.auth().current_user().unwrap().is_none());
}

#[test]
fn test_logout_removes_session_file() {
    let dir = data_dir();
    let state = open(&dir);
    state
        .auth()
        .register(registration("Acme Co", "secret123"))
        .unwrap();
    state.auth().login("Acme Co", &secret("secret123")).unwrap();

    let session_file = dir.path().join(format!("{}.json", keys::CURRENT_USER));
    assert!(session_file.exists());
    state.auth().logout().unwrap();
    assert!(!session_file.exists());
}
