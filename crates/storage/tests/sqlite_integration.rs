use std::sync::Arc;

use onboard_core::model::{SessionId, SessionKey, UserProfile};
use storage::repository::SessionStore;
use storage::sqlite::SqliteRepository;
use storage::{SessionStorage, Storage};

async fn connect(name: &str, session_id: SessionId) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url, session_id)
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_upserts_and_reads_back() {
    let repo = connect("memdb_upsert", SessionId::new_random()).await;

    repo.set_raw(SessionKey::PersonalityUserData, "one".into())
        .await
        .unwrap();
    repo.set_raw(SessionKey::PersonalityUserData, "two".into())
        .await
        .unwrap();

    let value = repo.get_raw(SessionKey::PersonalityUserData).await.unwrap();
    assert_eq!(value.as_deref(), Some("two"));
    assert_eq!(repo.get_raw(SessionKey::PersonalityResults).await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_sessions_are_isolated() {
    let first = connect("memdb_isolated", SessionId::new_random()).await;
    let second = connect("memdb_isolated", SessionId::new_random()).await;

    first
        .set_raw(SessionKey::PersonalityResults, "{}".into())
        .await
        .unwrap();
    assert_eq!(second.get_raw(SessionKey::PersonalityResults).await.unwrap(), None);

    second.clear().await.unwrap();
    assert!(first.get_raw(SessionKey::PersonalityResults).await.unwrap().is_some());

    let purged = second.purge_other_sessions().await.unwrap();
    assert_eq!(purged, 1);
    assert_eq!(first.get_raw(SessionKey::PersonalityResults).await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice", SessionId::new_random()).await;
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn sqlite_storage_round_trips_typed_values() {
    let session_id = SessionId::new_random();
    let storage = Storage::sqlite("sqlite:file:memdb_typed?mode=memory&cache=shared", session_id)
        .await
        .expect("open storage");
    let typed = SessionStorage::new(Arc::clone(&storage.session));

    let profile = UserProfile::new("Asha", "16", "doctor");
    typed
        .set(SessionKey::PersonalityUserData, &profile)
        .await
        .unwrap();
    let back: Option<UserProfile> = typed.get(SessionKey::PersonalityUserData).await.unwrap();
    assert_eq!(back, Some(profile));

    typed.clear().await.unwrap();
    assert!(!typed.contains(SessionKey::PersonalityUserData).await.unwrap());
}
