// ============================================================================
// campus_store Library
// ============================================================================

pub mod config;
pub mod core;
pub mod notify;
pub mod record;
pub mod remote;
pub mod store;

// Re-export main types for convenience
pub use config::{MutationKind, StoreConfig};
pub use crate::core::{GENERIC_ERROR_MESSAGE, RemoteError, Result, StoreError, ValidationError};
pub use notify::{ChannelNotifier, LogNotifier, NoopNotifier, Notice, NoticeKind, Notifier};
pub use record::{
    AlumniDraft, AlumniPatch, AlumniProfile, GalleryDraft, GalleryImage, GalleryPatch, JsonRecord,
    ListRecord, TempIdGenerator,
};
pub use remote::{InMemoryRemote, RemoteDataService, RemoteOp, TimeoutRemote};
pub use store::{ERROR_TITLE, ListSnapshot, MutationOutcome, OptimisticListStore, SUCCESS_TITLE};

// ============================================================================
// Portal store constructors
// ============================================================================

/// Store for the public gallery page.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use campus_store::{GalleryDraft, GalleryImage, InMemoryRemote, gallery_store};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = gallery_store(Vec::new(), Arc::new(InMemoryRemote::<GalleryImage>::new()));
/// let outcome = store
///     .create(GalleryDraft::new("Founders Day", "https://cdn.college.edu/founders.jpg"))
///     .await;
///
/// assert!(outcome.is_confirmed());
/// assert_eq!(store.len().await, 1);
/// # }
/// ```
pub fn gallery_store(
    initial: Vec<GalleryImage>,
    remote: std::sync::Arc<dyn RemoteDataService<GalleryImage>>,
) -> OptimisticListStore<GalleryImage> {
    OptimisticListStore::with_config(
        initial,
        remote,
        StoreConfig::new("gallery").entity_label("Gallery image"),
    )
}

/// Store for the alumni directory.
///
/// ```
/// use std::sync::Arc;
/// use campus_store::{AlumniDraft, AlumniProfile, InMemoryRemote, alumni_store};
///
/// # tokio_test::block_on(async {
/// let store = alumni_store(Vec::new(), Arc::new(InMemoryRemote::<AlumniProfile>::new()));
/// let outcome = store.create(AlumniDraft::new("Meera Iyer", 1948, "B.Tech")).await;
///
/// assert_eq!(outcome.message(), Some("Invalid graduation year"));
/// assert!(store.is_empty().await);
/// # })
/// ```
pub fn alumni_store(
    initial: Vec<AlumniProfile>,
    remote: std::sync::Arc<dyn RemoteDataService<AlumniProfile>>,
) -> OptimisticListStore<AlumniProfile> {
    OptimisticListStore::with_config(
        initial,
        remote,
        StoreConfig::new("alumni").entity_label("Alumni record"),
    )
}
