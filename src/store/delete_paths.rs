impl<R: ListRecord> OptimisticListStore<R> {
    /// Removes the entity with `id` optimistically.
    ///
    /// Unknown ids are a silent no-op. On remote failure the captured entity is
    /// put back (unless something re-inserted that id meanwhile) and the list is
    /// re-sorted.
    pub async fn delete(&self, id: &str) -> MutationOutcome {
        let removed = {
            let mut state = self.state.lock().await;
            let Some(index) = state.position(id) else {
                debug!(
                    "delete skipped, id not in list: store='{}' id='{}'",
                    self.config.name, id
                );
                return MutationOutcome::NotFound;
            };
            if self.busy(&state, id) {
                warn!(
                    "delete rejected, operation already in flight: store='{}' id='{}'",
                    self.config.name, id
                );
                return MutationOutcome::Busy;
            }

            let removed = state.items.remove(index);
            state.loading = true;
            state.begin_flight(id);
            removed
        };
        debug!(
            "optimistic delete applied: store='{}' id='{}'",
            self.config.name, id
        );

        let remote_result = self.remote.delete(id).await;

        let outcome = {
            let mut state = self.state.lock().await;
            state.end_flight(id);
            match remote_result {
                Ok(()) => {
                    state.items.retain(|item| item.id() != id);
                    sort_newest_first(&mut state.items);
                    state.settle_confirmed();
                    MutationOutcome::Confirmed
                }
                Err(err) => {
                    let message = err.message();
                    if state.position(id).is_none() {
                        state.items.push(removed);
                        sort_newest_first(&mut state.items);
                    }
                    state.settle_failed(message.clone());
                    MutationOutcome::RolledBack { message }
                }
            }
        };

        if let MutationOutcome::RolledBack { message } = &outcome {
            warn!(
                "optimistic delete rolled back: store='{}' id='{}' error='{}'",
                self.config.name, id, message
            );
        }
        self.finish(MutationKind::Delete, outcome)
    }
}
