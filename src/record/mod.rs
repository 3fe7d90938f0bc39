//! Record contract shared by every list the store can manage.

pub mod alumni;
pub mod gallery;
pub mod json_record;
pub mod validation;

use crate::core::ValidationError;
use crate::core::newest_first;

pub use alumni::{AlumniDraft, AlumniPatch, AlumniProfile};
pub use gallery::{GalleryDraft, GalleryImage, GalleryPatch};
pub use json_record::JsonRecord;

/// Default marker prepended to locally generated ids.
pub const DEFAULT_TEMP_ID_PREFIX: &str = "temp-";

/// A record type managed by an [`OptimisticListStore`](crate::store::OptimisticListStore).
///
/// `Draft` is the payload a caller submits to create a record (everything except
/// `id` and `created_at`); `Patch` is a partial update merged shallowly onto an
/// existing record.
pub trait ListRecord: Clone + Send + Sync + 'static {
    type Draft: Clone + Send + Sync + 'static;
    type Patch: Clone + Send + Sync + 'static;

    fn id(&self) -> &str;

    /// Raw ISO-8601 creation timestamp, used only for ordering.
    fn created_at(&self) -> Option<&str>;

    /// Builds a full record from a draft plus the identity fields.
    fn from_draft(draft: Self::Draft, id: String, created_at: String) -> Self;

    /// Shallow merge: every field present in `patch` overwrites the record's value.
    ///
    /// Must be idempotent and must never change `id`.
    fn apply_patch(&mut self, patch: &Self::Patch);

    fn validate_draft(_draft: &Self::Draft) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate_patch(_patch: &Self::Patch) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Sorts records newest first by `created_at`; undated records go last.
pub fn sort_newest_first<R: ListRecord>(items: &mut [R]) {
    items.sort_by(|left, right| newest_first(left.created_at(), right.created_at()));
}

/// Drops later duplicates of an id, keeping the first occurrence.
pub fn dedup_by_id<R: ListRecord>(items: Vec<R>) -> Vec<R> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.id().to_string()))
        .collect()
}

/// Issues placeholder ids for optimistically inserted records.
///
/// Ids are `<prefix><n>` with `n` strictly increasing per generator, so two
/// creates in the same clock tick never share an id.
#[derive(Debug, Clone)]
pub struct TempIdGenerator {
    prefix: String,
    next: u64,
}

impl TempIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the next id for which `taken` is false.
    pub fn next_id<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let candidate = format!("{}{}", self.prefix, self.next);
            self.next += 1;
            if !taken(&candidate) {
                return candidate;
            }
        }
    }

    pub fn is_temporary(&self, id: &str) -> bool {
        id.starts_with(&self.prefix)
    }
}

impl Default for TempIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TEMP_ID_PREFIX)
    }
}
