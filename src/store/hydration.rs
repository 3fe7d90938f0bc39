impl<R: ListRecord> OptimisticListStore<R> {
    /// Replaces the whole collection, e.g. after a full remote fetch.
    ///
    /// No optimism, no rollback, no notification. Later duplicates of an id are
    /// dropped; order is kept as given.
    pub async fn set_data(&self, records: Vec<R>) {
        let records = dedup_by_id(records);
        let mut state = self.state.lock().await;
        debug!(
            "collection replaced: store='{}' items={}",
            self.config.name,
            records.len()
        );
        state.items = records;
    }

    /// Direct status override for callers sequencing their own fetches.
    pub async fn set_loading(&self, loading: bool) {
        self.state.lock().await.loading = loading;
    }

    /// Reloads the collection from the remote's `fetch_all`.
    ///
    /// Fetched rows are deduplicated by id and sorted newest first. A failed
    /// fetch leaves the list untouched, emits one error notification and is
    /// returned to the caller; `error` is not modified either way.
    pub async fn refresh(&self) -> Result<usize> {
        self.set_loading(true).await;
        let fetched = self.remote.fetch_all().await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match fetched {
            Ok(records) => {
                let mut records = dedup_by_id(records);
                sort_newest_first(&mut records);
                let count = records.len();
                state.items = records;
                debug!(
                    "collection refreshed: store='{}' items={}",
                    self.config.name, count
                );
                Ok(count)
            }
            Err(err) => {
                drop(state);
                warn!(
                    "refresh failed: store='{}' error='{}'",
                    self.config.name, err
                );
                self.notifier.notify(
                    NoticeKind::Error,
                    ERROR_TITLE,
                    Some(&self.config.fetch_failure_message()),
                );
                Err(err.into())
            }
        }
    }
}
