// Integration tests for the admin session lifecycle
//
// Tests cover:
// - File-backed sessions surviving a restart
// - Sliding expiry across a restart
// - Cleanup of expired sessions in the persisted file

use chrono::Duration;
use statcon::security::{
    AdminCredentials, JwtTokenCodec, LocalSessionStore, ManualClock, SESSION_STORAGE_KEY,
    SessionStore,
};
use statcon::storage::{FileKeyValueStore, KeyValueStore};
use std::path::Path;
use std::sync::Arc;

const T0: i64 = 1_760_000_000_000;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

async fn open_store(path: &Path, clock: Arc<ManualClock>) -> LocalSessionStore {
    let storage = Arc::new(FileKeyValueStore::open(path).await.unwrap());
    LocalSessionStore::new(
        storage,
        Arc::new(JwtTokenCodec::new(
            "integration-secret-with-enough-length",
            "statcon",
        )),
        clock,
        AdminCredentials::new("admin", "correct horse"),
        DAY_MS,
    )
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = Arc::new(ManualClock::new(T0));

    let store = open_store(&path, clock.clone()).await;
    assert!(store.login("admin", "correct horse").await.success);
    let token = store.current_token().await.unwrap();
    drop(store);

    clock.advance(Duration::hours(2));
    let restarted = open_store(&path, clock.clone()).await;
    assert!(restarted.is_authenticated().await);
    assert!(restarted.authorize(&token).await);
}

#[tokio::test]
async fn test_refresh_persists_new_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = Arc::new(ManualClock::new(T0));

    let store = open_store(&path, clock.clone()).await;
    store.login("admin", "correct horse").await;
    clock.advance(Duration::hours(1));
    assert!(store.refresh_token().await);
    drop(store);

    clock.set(T0 + DAY_MS + 30 * 60 * 1000);
    let restarted = open_store(&path, clock.clone()).await;
    assert!(restarted.is_authenticated().await);
}

#[tokio::test]
async fn test_expired_session_is_removed_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = Arc::new(ManualClock::new(T0));

    let store = open_store(&path, clock.clone()).await;
    store.login("admin", "correct horse").await;

    clock.set(T0 + DAY_MS + 1);
    assert!(!store.is_authenticated().await);
    drop(store);

    let reopened = FileKeyValueStore::open(&path).await.unwrap();
    assert_eq!(reopened.get(SESSION_STORAGE_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_rejected_login_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = Arc::new(ManualClock::new(T0));

    let store = open_store(&path, clock).await;
    let outcome = store.login("admin", "Correct Horse").await;

    assert!(!outcome.success);
    assert!(outcome.message.is_some());
    assert!(!path.exists());
}
