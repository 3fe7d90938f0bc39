use campus_store::{
    AlumniDraft, AlumniPatch, AlumniProfile, ChannelNotifier, GalleryDraft, GalleryImage,
    InMemoryRemote, JsonRecord, MutationOutcome,
    Notice, NoticeKind, OptimisticListStore, RemoteDataService, RemoteError, RemoteOp,
    StoreConfig, alumni_store, gallery_store,
};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {other}"),
    }
}

fn record(id: &str, title: &str, created_at: &str) -> JsonRecord {
    JsonRecord::new(id, Some(created_at), object(json!({ "title": title })))
}

fn setup(
    initial: Vec<JsonRecord>,
) -> (
    OptimisticListStore<JsonRecord>,
    Arc<InMemoryRemote<JsonRecord>>,
    UnboundedReceiver<Notice>,
) {
    let remote = Arc::new(InMemoryRemote::<JsonRecord>::with_rows(initial.clone()));
    let (notifier, notices) = ChannelNotifier::new();
    let store = OptimisticListStore::<JsonRecord>::new(initial, remote.clone())
        .with_notifier(Arc::new(notifier));
    (store, remote, notices)
}

fn drain(notices: &mut UnboundedReceiver<Notice>) -> Vec<Notice> {
    let mut drained = Vec::new();
    while let Ok(notice) = notices.try_recv() {
        drained.push(notice);
    }
    drained
}

fn campus_records() -> Vec<JsonRecord> {
    vec![
        record("n3", "Convocation", "2024-05-01T00:00:00Z"),
        record("n2", "Orientation", "2024-03-01T00:00:00Z"),
        record("n1", "Admissions open", "2024-01-01T00:00:00Z"),
    ]
}

#[tokio::test]
async fn test_founders_day_create_is_visible_before_remote_settles() {
    let (store, remote, mut notices) = setup(Vec::new());
    remote.hold_calls();

    let create = store.create(object(json!({ "title": "Founders Day" })));
    tokio::pin!(create);
    assert!(futures::poll!(create.as_mut()).is_pending());

    let pending = store.snapshot().await;
    assert_eq!(pending.items.len(), 1);
    assert_eq!(pending.items[0].get_str("title"), Some("Founders Day"));
    assert!(pending.items[0].id.starts_with("temp-"));
    assert!(store.is_temporary_id(&pending.items[0].id));
    assert!(pending.loading);

    remote.release_calls(1);
    assert_eq!(create.await, MutationOutcome::Confirmed);

    let settled = store.snapshot().await;
    assert_eq!(settled.items.len(), 1);
    assert!(!settled.loading);
    assert_eq!(settled.error, None);

    let notices = drain(&mut notices);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].title, "Success");
    assert_eq!(notices[0].description.as_deref(), Some("Item created successfully"));
}

#[tokio::test]
async fn test_network_down_update_rolls_back() {
    let (store, remote, mut notices) =
        setup(vec![record("a1", "Old", "2024-01-01T00:00:00Z")]);
    remote.fail_next(
        RemoteOp::Update,
        1,
        RemoteError::Rejected("network down".to_string()),
    );

    let outcome = store
        .update("a1", object(json!({ "title": "New" })))
        .await;

    assert_eq!(
        outcome,
        MutationOutcome::RolledBack {
            message: "network down".to_string()
        }
    );
    let entity = store.get("a1").await.unwrap();
    assert_eq!(entity.get_str("title"), Some("Old"));
    assert_eq!(store.error().await.as_deref(), Some("network down"));
    assert!(!store.loading().await);

    let notices = drain(&mut notices);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].title, "Error");
    assert_eq!(notices[0].description.as_deref(), Some("Failed to update item"));
}

#[tokio::test]
async fn test_failed_create_leaves_size_unchanged() {
    let (store, remote, mut notices) = setup(campus_records());
    remote.fail_next(RemoteOp::Create, 1, RemoteError::Transport("offline".to_string()));

    let outcome = store
        .create(object(json!({ "title": "Sports Day" })))
        .await;

    assert!(outcome.is_rolled_back());
    assert_eq!(store.items().await, campus_records());
    assert_eq!(store.error().await.as_deref(), Some("offline"));
    assert!(!store.loading().await);
    assert_eq!(drain(&mut notices).len(), 1);
}

#[tokio::test]
async fn test_blank_rejection_uses_generic_message() {
    let (store, remote, _notices) = setup(campus_records());
    remote.fail_next(RemoteOp::Delete, 1, RemoteError::Rejected(String::new()));

    let outcome = store.delete("n2").await;

    assert_eq!(outcome.message(), Some("An error occurred"));
    assert_eq!(store.error().await.as_deref(), Some("An error occurred"));
}

#[tokio::test]
async fn test_failed_update_touches_no_other_entity() {
    let (store, remote, _notices) = setup(campus_records());
    remote.fail_next(RemoteOp::Update, 1, RemoteError::Unknown);

    let before = store.items().await;
    store
        .update(
            "n2",
            object(json!({ "title": "Orientation Week", "created_at": "2025-01-01T00:00:00Z" })),
        )
        .await;

    assert_eq!(store.items().await, before);
}

#[tokio::test]
async fn test_failed_delete_reinserts_entity_in_order() {
    let (store, remote, mut notices) = setup(campus_records());
    remote.fail_next(RemoteOp::Delete, 1, RemoteError::Transport("reset".to_string()));

    let outcome = store.delete("n2").await;

    assert!(outcome.is_rolled_back());
    assert_eq!(store.items().await, campus_records());
    assert_eq!(store.error().await.as_deref(), Some("reset"));
    let notices = drain(&mut notices);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].description.as_deref(), Some("Failed to delete item"));
}

#[tokio::test]
async fn test_delete_removes_entity_and_row() {
    let (store, remote, mut notices) = setup(campus_records());

    assert_eq!(store.delete("n3").await, MutationOutcome::Confirmed);

    let ids: Vec<String> = store.items().await.into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["n2", "n1"]);
    assert_eq!(remote.rows().len(), 2);
    assert_eq!(
        drain(&mut notices)[0].description.as_deref(),
        Some("Item deleted successfully")
    );
}

#[tokio::test]
async fn test_confirmed_delete_sorts_unsorted_seed() {
    let (store, _remote, _notices) = setup(vec![
        record("old", "Alumni meet", "2023-01-01T00:00:00Z"),
        record("mid", "Sports day", "2024-01-01T00:00:00Z"),
        record("new", "Convocation", "2025-01-01T00:00:00Z"),
    ]);

    assert_eq!(store.delete("mid").await, MutationOutcome::Confirmed);

    let ids: Vec<String> = store.items().await.into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["new", "old"]);
}

#[tokio::test]
async fn test_missing_id_is_a_silent_no_op() {
    let (store, remote, mut notices) = setup(campus_records());
    store.set_loading(true).await;

    assert_eq!(
        store.update("ghost", object(json!({ "title": "x" }))).await,
        MutationOutcome::NotFound
    );
    assert_eq!(store.delete("ghost").await, MutationOutcome::NotFound);

    assert_eq!(store.items().await, campus_records());
    assert_eq!(remote.total_calls(), 0);
    assert!(store.loading().await);
    assert_eq!(store.error().await, None);
    assert!(drain(&mut notices).is_empty());
}

#[tokio::test]
async fn test_successful_update_resorts_list() {
    let (store, _remote, _notices) = setup(campus_records());

    let outcome = store
        .update("n1", object(json!({ "created_at": "2024-12-31T00:00:00Z" })))
        .await;

    assert!(outcome.is_confirmed());
    let ids: Vec<String> = store.items().await.into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["n1", "n3", "n2"]);
}

#[tokio::test]
async fn test_error_persists_until_next_success() {
    let (store, remote, _notices) = setup(campus_records());
    remote.fail_next(RemoteOp::Update, 1, RemoteError::Rejected("first".to_string()));

    store.update("n1", object(json!({ "title": "a" }))).await;
    assert_eq!(store.error().await.as_deref(), Some("first"));

    store.set_data(campus_records()).await;
    store.set_loading(false).await;
    assert_eq!(store.error().await.as_deref(), Some("first"));

    remote.fail_next(RemoteOp::Delete, 1, RemoteError::Rejected("second".to_string()));
    store.delete("n1").await;
    assert_eq!(store.error().await.as_deref(), Some("second"));

    store.update("n1", object(json!({ "title": "b" }))).await;
    assert_eq!(store.error().await, None);
}

#[tokio::test]
async fn test_set_data_is_idempotent_and_silent() {
    let (store, remote, mut notices) = setup(Vec::new());
    let rows = campus_records();

    store.set_data(rows.clone()).await;
    let once = store.snapshot().await;
    store.set_data(rows.clone()).await;
    let twice = store.snapshot().await;

    assert_eq!(once, twice);
    assert_eq!(twice.items, rows);
    assert_eq!(remote.total_calls(), 0);
    assert!(drain(&mut notices).is_empty());
}

#[tokio::test]
async fn test_set_data_drops_duplicate_ids() {
    let (store, _remote, _notices) = setup(Vec::new());
    store
        .set_data(vec![
            record("x", "First", "2024-01-01T00:00:00Z"),
            record("x", "Second", "2024-02-01T00:00:00Z"),
        ])
        .await;

    let items = store.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get_str("title"), Some("First"));
}

#[tokio::test]
async fn test_create_reconciles_server_id() {
    let (store, remote, _notices) = setup(campus_records());

    let outcome = store
        .create(object(json!({ "title": "Alumni Meet" })))
        .await;
    assert!(outcome.is_confirmed());

    let items = store.items().await;
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|item| !store.is_temporary_id(&item.id)));
    let created = items
        .iter()
        .find(|item| item.get_str("title") == Some("Alumni Meet"))
        .unwrap();
    assert!(remote.rows().iter().any(|row| row.id == created.id));
    assert_eq!(items[0].id, created.id);
}

#[tokio::test]
async fn test_create_without_returned_row_keeps_temp_id() {
    let (store, remote, _notices) = setup(Vec::new());
    remote.return_created(false);

    store.create(object(json!({ "title": "Hackathon" }))).await;

    let items = store.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "temp-1");
    assert_ne!(remote.rows()[0].id, "temp-1");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_remote() {
    let remote = Arc::new(InMemoryRemote::<GalleryImage>::new());
    let (notifier, mut notices) = ChannelNotifier::new();
    let store = gallery_store(Vec::new(), remote.clone()).with_notifier(Arc::new(notifier));

    let outcome = store
        .create(GalleryDraft::new("X", "https://cdn.college.edu/x.jpg"))
        .await;

    assert_eq!(
        outcome,
        MutationOutcome::Invalid {
            message: "Title must be at least 2 characters".to_string()
        }
    );
    assert!(store.is_empty().await);
    assert!(!store.loading().await);
    assert_eq!(remote.total_calls(), 0);
    assert_eq!(
        store.error().await.as_deref(),
        Some("Title must be at least 2 characters")
    );

    let notices = drain(&mut notices);
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].description.as_deref(),
        Some("Failed to create gallery image")
    );
}

#[tokio::test]
async fn test_refresh_hydrates_sorted_rows() {
    let remote = Arc::new(InMemoryRemote::<JsonRecord>::with_rows(vec![
        record("n1", "Admissions open", "2024-01-01T00:00:00Z"),
        record("n3", "Convocation", "2024-05-01T00:00:00Z"),
        record("n2", "Orientation", "2024-03-01T00:00:00Z"),
    ]));
    let store = OptimisticListStore::<JsonRecord>::new(Vec::new(), remote.clone());

    assert_eq!(store.refresh().await.unwrap(), 3);
    assert_eq!(store.items().await, campus_records());
    assert!(!store.loading().await);
    assert_eq!(remote.calls(RemoteOp::FetchAll), 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_list_and_notifies() {
    let (store, remote, mut notices) = setup(campus_records());
    remote.fail_next(RemoteOp::FetchAll, 1, RemoteError::Transport("dns".to_string()));

    let err = store.refresh().await.unwrap_err();

    assert_eq!(err.to_string(), "Remote error: dns");
    assert_eq!(store.items().await, campus_records());
    assert!(!store.loading().await);
    assert_eq!(store.error().await, None);
    let notices = drain(&mut notices);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].description.as_deref(), Some("Failed to fetch items"));
}

struct WriteOnlyRemote;

#[async_trait::async_trait]
impl RemoteDataService<JsonRecord> for WriteOnlyRemote {
    async fn create(&self, _draft: &Map<String, Value>) -> Result<Option<JsonRecord>, RemoteError> {
        Ok(None)
    }

    async fn update(&self, _id: &str, _patch: &Map<String, Value>) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<(), RemoteError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_refresh_without_fetch_support_is_unsupported() {
    let store = OptimisticListStore::<JsonRecord>::new(campus_records(), Arc::new(WriteOnlyRemote));

    let err = store.refresh().await.unwrap_err();

    assert_eq!(err.to_string(), "Remote error: unsupported remote operation: fetch_all");
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_custom_label_and_prefix() {
    let remote = Arc::new(InMemoryRemote::<JsonRecord>::new());
    remote.return_created(false);
    let (notifier, mut notices) = ChannelNotifier::new();
    let config = StoreConfig::new("notices")
        .entity_label("Notice")
        .temp_id_prefix("draft:");
    let store = OptimisticListStore::<JsonRecord>::with_config(Vec::new(), remote, config)
        .with_notifier(Arc::new(notifier));

    store.create(object(json!({ "title": "Exam schedule" }))).await;

    assert_eq!(store.name(), "notices");
    assert_eq!(store.items().await[0].id, "draft:1");
    assert_eq!(
        drain(&mut notices)[0].description.as_deref(),
        Some("Notice created successfully")
    );
}

#[tokio::test]
async fn test_alumni_store_rejects_invalid_patch_before_applying() {
    let remote = Arc::new(InMemoryRemote::<AlumniProfile>::new());
    let store = alumni_store(Vec::new(), remote.clone());

    let created = store
        .create(AlumniDraft::new("Meera Iyer", 2015, "B.Tech").email("meera@alumni.edu"))
        .await;
    assert!(created.is_confirmed());
    let profile = store.items().await.remove(0);
    assert!(!store.is_temporary_id(&profile.id));

    let outcome = store
        .update(&profile.id, AlumniPatch::default().name("M"))
        .await;

    assert_eq!(
        outcome,
        MutationOutcome::Invalid {
            message: "Name must be at least 2 characters".to_string()
        }
    );
    assert_eq!(store.get(&profile.id).await, Some(profile));
    assert_eq!(remote.calls(RemoteOp::Update), 0);
    assert_eq!(
        store.error().await.as_deref(),
        Some("Name must be at least 2 characters")
    );
}
