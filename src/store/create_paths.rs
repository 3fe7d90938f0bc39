impl<R: ListRecord> OptimisticListStore<R> {
    /// Creates a record optimistically.
    ///
    /// The record is prepended immediately under a temporary id and the current
    /// timestamp, then the draft is sent to the remote. On success the list is
    /// re-sorted; if the remote returned the stored row, that row replaces the
    /// temporary entity. On failure the temporary entity is removed.
    pub async fn create(&self, draft: R::Draft) -> MutationOutcome {
        if let Err(err) = R::validate_draft(&draft) {
            self.state.lock().await.error = Some(err.message.clone());
            debug!(
                "create rejected by validation: store='{}' field='{}' error='{}'",
                self.config.name, err.field, err.message
            );
            return self.finish(
                MutationKind::Create,
                MutationOutcome::Invalid {
                    message: err.message,
                },
            );
        }

        let temp_id = {
            let mut state = self.state.lock().await;
            let ListState {
                items,
                loading,
                in_flight,
                temp_ids,
                ..
            } = &mut *state;
            let temp_id =
                temp_ids.next_id(|candidate| items.iter().any(|item| item.id() == candidate));
            items.insert(
                0,
                R::from_draft(draft.clone(), temp_id.clone(), now_iso_string()),
            );
            *loading = true;
            *in_flight.entry(temp_id.clone()).or_insert(0) += 1;
            temp_id
        };
        debug!(
            "optimistic create applied: store='{}' temp_id='{}'",
            self.config.name, temp_id
        );

        let remote_result = self.remote.create(&draft).await;

        let outcome = {
            let mut state = self.state.lock().await;
            state.end_flight(&temp_id);
            match remote_result {
                Ok(stored) => {
                    if let Some(record) = stored {
                        state.reconcile_created(&temp_id, record);
                    }
                    sort_newest_first(&mut state.items);
                    state.settle_confirmed();
                    MutationOutcome::Confirmed
                }
                Err(err) => {
                    let message = err.message();
                    state.items.retain(|item| item.id() != temp_id);
                    state.settle_failed(message.clone());
                    MutationOutcome::RolledBack { message }
                }
            }
        };

        match &outcome {
            MutationOutcome::RolledBack { message } => warn!(
                "optimistic create rolled back: store='{}' temp_id='{}' error='{}'",
                self.config.name, temp_id, message
            ),
            _ => debug!(
                "create confirmed: store='{}' temp_id='{}'",
                self.config.name, temp_id
            ),
        }
        self.finish(MutationKind::Create, outcome)
    }
}
