//! Optimistic list store.
//!
//! Mirrors one remote collection locally. Every mutation is applied to the local
//! list first, then sent to the [`RemoteDataService`]; a rejected call rewinds the
//! local change. Remote failures never escape as errors: they end up in
//! [`OptimisticListStore::error`], in the returned [`MutationOutcome`] and in one
//! notification.

use crate::config::{MutationKind, StoreConfig};
use crate::core::{Result, now_iso_string};
use crate::notify::{NoopNotifier, NoticeKind, Notifier};
use crate::record::{ListRecord, TempIdGenerator, dedup_by_id, sort_newest_first};
use crate::remote::RemoteDataService;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

// Store implementation is split by operation, the same way the paths settle.
include!("store/state.rs");
include!("store/create_paths.rs");
include!("store/update_paths.rs");
include!("store/delete_paths.rs");
include!("store/hydration.rs");
