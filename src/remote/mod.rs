//! Persistence boundary the store delegates real storage to.

pub mod memory;
pub mod timeout;

use crate::core::RemoteError;
use crate::record::ListRecord;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub use memory::InMemoryRemote;
pub use timeout::TimeoutRemote;

/// Remote operation names, used for failure injection and call accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOp {
    Create,
    Update,
    Delete,
    FetchAll,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::FetchAll => "fetch_all",
        };
        write!(f, "{label}")
    }
}

/// Remote Data Service for one record type.
///
/// `create` receives the caller's draft, never the optimistic record. It may
/// return the row the service actually stored; the store then swaps its
/// temporary entity for that row.
#[async_trait]
pub trait RemoteDataService<R: ListRecord>: Send + Sync + 'static {
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, RemoteError>;

    async fn update(&self, id: &str, patch: &R::Patch) -> Result<(), RemoteError>;

    async fn delete(&self, id: &str) -> Result<(), RemoteError>;

    /// Full collection read used by `refresh`.
    async fn fetch_all(&self) -> Result<Vec<R>, RemoteError> {
        Err(RemoteError::Unsupported("fetch_all"))
    }
}

#[async_trait]
impl<R, S> RemoteDataService<R> for Arc<S>
where
    R: ListRecord,
    S: RemoteDataService<R> + ?Sized,
{
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, RemoteError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &str, patch: &R::Patch) -> Result<(), RemoteError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        (**self).delete(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<R>, RemoteError> {
        (**self).fetch_all().await
    }
}
