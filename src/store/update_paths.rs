impl<R: ListRecord> OptimisticListStore<R> {
    /// Merges `patch` onto the entity with `id` optimistically.
    ///
    /// Unknown ids are a silent no-op. On remote failure only that entity is
    /// restored to its pre-call value; every other entity is left alone.
    pub async fn update(&self, id: &str, patch: R::Patch) -> MutationOutcome {
        let original = {
            let mut state = self.state.lock().await;
            let Some(index) = state.position(id) else {
                debug!(
                    "update skipped, id not in list: store='{}' id='{}'",
                    self.config.name, id
                );
                return MutationOutcome::NotFound;
            };
            if self.busy(&state, id) {
                warn!(
                    "update rejected, operation already in flight: store='{}' id='{}'",
                    self.config.name, id
                );
                return MutationOutcome::Busy;
            }
            if let Err(err) = R::validate_patch(&patch) {
                state.error = Some(err.message.clone());
                drop(state);
                return self.finish(
                    MutationKind::Update,
                    MutationOutcome::Invalid {
                        message: err.message,
                    },
                );
            }

            let original = state.items[index].clone();
            state.items[index].apply_patch(&patch);
            state.loading = true;
            state.begin_flight(id);
            original
        };
        debug!(
            "optimistic update applied: store='{}' id='{}'",
            self.config.name, id
        );

        let remote_result = self.remote.update(id, &patch).await;

        let outcome = {
            let mut state = self.state.lock().await;
            state.end_flight(id);
            let index = state.position(id);
            match remote_result {
                Ok(()) => {
                    if let Some(index) = index {
                        state.items[index].apply_patch(&patch);
                    }
                    sort_newest_first(&mut state.items);
                    state.settle_confirmed();
                    MutationOutcome::Confirmed
                }
                Err(err) => {
                    let message = err.message();
                    if let Some(index) = index {
                        state.items[index] = original;
                    }
                    state.settle_failed(message.clone());
                    MutationOutcome::RolledBack { message }
                }
            }
        };

        if let MutationOutcome::RolledBack { message } = &outcome {
            warn!(
                "optimistic update rolled back: store='{}' id='{}' error='{}'",
                self.config.name, id, message
            );
        }
        self.finish(MutationKind::Update, outcome)
    }
}
