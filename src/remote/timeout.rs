use super::RemoteDataService;
use crate::core::RemoteError;
use crate::record::ListRecord;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Bounds every call of the wrapped service.
///
/// An overdue call surfaces as [`RemoteError::Timeout`], which the store treats
/// like any other remote failure. The inner future is dropped at the deadline.
pub struct TimeoutRemote<S> {
    inner: S,
    limit: Duration,
}

impl<S> TimeoutRemote<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, RemoteError>
    where
        F: Future<Output = Result<T, RemoteError>>,
    {
        tokio::time::timeout(self.limit, call)
            .await
            .map_err(|_| RemoteError::Timeout(self.limit))?
    }
}

#[async_trait]
impl<R, S> RemoteDataService<R> for TimeoutRemote<S>
where
    R: ListRecord,
    S: RemoteDataService<R>,
{
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, RemoteError> {
        self.bounded(self.inner.create(draft)).await
    }

    async fn update(&self, id: &str, patch: &R::Patch) -> Result<(), RemoteError> {
        self.bounded(self.inner.update(id, patch)).await
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        self.bounded(self.inner.delete(id)).await
    }

    async fn fetch_all(&self) -> Result<Vec<R>, RemoteError> {
        self.bounded(self.inner.fetch_all()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GalleryDraft, GalleryImage};
    use crate::remote::{InMemoryRemote, RemoteOp};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_parked_call_times_out() {
        let memory = Arc::new(InMemoryRemote::<GalleryImage>::new());
        memory.hold_calls();
        let remote = TimeoutRemote::new(memory.clone(), Duration::from_secs(5));

        let result = remote.delete("g1").await;
        assert_eq!(result, Err(RemoteError::Timeout(Duration::from_secs(5))));
        assert_eq!(memory.calls(RemoteOp::Delete), 1);
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let memory = Arc::new(InMemoryRemote::<GalleryImage>::new());
        let remote = TimeoutRemote::new(memory.clone(), Duration::from_secs(5));

        let created = remote
            .create(&GalleryDraft::new("Library", "https://cdn.college.edu/library.jpg"))
            .await
            .unwrap();
        assert!(created.is_some());
        assert_eq!(memory.rows().len(), 1);
    }
}
