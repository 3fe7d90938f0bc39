use super::{RemoteDataService, RemoteOp};
use crate::core::{RemoteError, now_iso_string};
use crate::record::{ListRecord, sort_newest_first};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Semaphore;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct FailurePlan {
    /// `None` fails every call.
    remaining: Option<usize>,
    error: RemoteError,
}

/// Server-side table kept in memory.
///
/// Behaves like the hosted database the portal talks to: ids are uuid v4,
/// `created_at` is stamped on insert, updates and deletes of unknown ids succeed
/// without touching anything. Failures can be injected per operation and calls
/// can be parked behind a gate until the test releases them.
pub struct InMemoryRemote<R: ListRecord> {
    rows: Mutex<Vec<R>>,
    failures: Mutex<HashMap<RemoteOp, FailurePlan>>,
    calls: Mutex<HashMap<RemoteOp, usize>>,
    return_created: AtomicBool,
    held: AtomicBool,
    waiting: AtomicUsize,
    gate: Semaphore,
}

/// Counts a call parked at the gate; also released when the call is dropped.
struct Parked<'a>(&'a AtomicUsize);

impl<'a> Parked<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for Parked<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: ListRecord> InMemoryRemote<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            return_created: AtomicBool::new(true),
            held: AtomicBool::new(false),
            waiting: AtomicUsize::new(0),
            gate: Semaphore::new(0),
        }
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        let remote = Self::new();
        remote.seed(rows);
        remote
    }

    pub fn seed(&self, rows: Vec<R>) {
        *lock(&self.rows) = rows;
    }

    /// Stored rows, newest first.
    pub fn rows(&self) -> Vec<R> {
        let mut rows = lock(&self.rows).clone();
        sort_newest_first(&mut rows);
        rows
    }

    /// Whether `create` hands the stored row back to the caller.
    ///
    /// Turning this off mimics an insert that does not select the new row.
    pub fn return_created(&self, enabled: bool) {
        self.return_created.store(enabled, Ordering::SeqCst);
    }

    pub fn fail_next(&self, op: RemoteOp, times: usize, error: RemoteError) {
        if times == 0 {
            return;
        }
        lock(&self.failures).insert(
            op,
            FailurePlan {
                remaining: Some(times),
                error,
            },
        );
    }

    pub fn fail_always(&self, op: RemoteOp, error: RemoteError) {
        lock(&self.failures).insert(
            op,
            FailurePlan {
                remaining: None,
                error,
            },
        );
    }

    pub fn heal(&self, op: RemoteOp) {
        lock(&self.failures).remove(&op);
    }

    pub fn calls(&self, op: RemoteOp) -> usize {
        lock(&self.calls).get(&op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        lock(&self.calls).values().sum()
    }

    /// Parks every subsequent call until released.
    pub fn hold_calls(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// Lets `count` parked (or future) calls through.
    pub fn release_calls(&self, count: usize) {
        self.gate.add_permits(count);
    }

    /// Stops parking calls and releases every call currently waiting.
    pub fn open_gate(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.add_permits(self.waiting.load(Ordering::SeqCst));
    }

    /// Number of calls currently parked at the gate.
    pub fn parked_calls(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }

    async fn enter(&self, op: RemoteOp) -> Result<(), RemoteError> {
        *lock(&self.calls).entry(op).or_insert(0) += 1;

        if self.held.load(Ordering::SeqCst) {
            let parked = Parked::enter(&self.waiting);
            let permit = self.gate.acquire().await;
            drop(parked);
            permit
                .map_err(|err| RemoteError::Transport(format!("remote gate closed: {err}")))?
                .forget();
        }

        let mut failures = lock(&self.failures);
        let Some(plan) = failures.get_mut(&op) else {
            return Ok(());
        };
        let error = plan.error.clone();
        match plan.remaining.as_mut() {
            None => Err(error),
            Some(remaining) => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    failures.remove(&op);
                }
                Err(error)
            }
        }
    }
}

impl<R: ListRecord> Default for InMemoryRemote<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: ListRecord> RemoteDataService<R> for InMemoryRemote<R> {
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, RemoteError> {
        self.enter(RemoteOp::Create).await?;
        let row = R::from_draft(draft.clone(), Uuid::new_v4().to_string(), now_iso_string());
        lock(&self.rows).push(row.clone());
        if self.return_created.load(Ordering::SeqCst) {
            Ok(Some(row))
        } else {
            Ok(None)
        }
    }

    async fn update(&self, id: &str, patch: &R::Patch) -> Result<(), RemoteError> {
        self.enter(RemoteOp::Update).await?;
        let mut rows = lock(&self.rows);
        if let Some(row) = rows.iter_mut().find(|row| row.id() == id) {
            row.apply_patch(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        self.enter(RemoteOp::Delete).await?;
        lock(&self.rows).retain(|row| row.id() != id);
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<R>, RemoteError> {
        self.enter(RemoteOp::FetchAll).await?;
        Ok(self.rows())
    }
}
