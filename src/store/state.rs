/// Title of the notification emitted for a confirmed mutation.
pub const SUCCESS_TITLE: &str = "Success";
/// Title of the notification emitted for a rolled back or rejected mutation.
pub const ERROR_TITLE: &str = "Error";

/// What a `create`/`update`/`delete` call ended up doing.
///
/// The mutation methods never fail; callers that only care about "the attempt
/// finished" can ignore this value and read [`OptimisticListStore::error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Remote call succeeded; the optimistic change stands.
    Confirmed,
    /// Remote call failed; the optimistic change was undone.
    RolledBack { message: String },
    /// No entity with that id is in the local list. Nothing was sent.
    NotFound,
    /// Another operation on the same id is still in flight. Nothing was sent.
    Busy,
    /// Draft or patch failed validation. Nothing was applied or sent.
    Invalid { message: String },
}

impl MutationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    pub fn is_rolled_back(&self) -> bool {
        matches!(self, Self::RolledBack { .. })
    }

    /// Failure message for rolled back or invalid mutations.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::RolledBack { message } | Self::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// Items and status captured under one lock.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

struct ListState<R> {
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
    in_flight: HashMap<String, usize>,
    temp_ids: TempIdGenerator,
}

impl<R: ListRecord> ListState<R> {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn begin_flight(&mut self, id: &str) {
        *self.in_flight.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Drops one pending operation for `id`; the id is removed with its last one.
    fn end_flight(&mut self, id: &str) {
        if let Some(pending) = self.in_flight.get_mut(id) {
            *pending -= 1;
            if *pending == 0 {
                self.in_flight.remove(id);
            }
        }
    }

    fn settle_confirmed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    fn settle_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Swaps the optimistic entity for the row the remote actually stored.
    fn reconcile_created(&mut self, temp_id: &str, record: R) {
        let temp_index = self.position(temp_id);
        if let Some(existing) = self.position(record.id()) {
            // A refresh already brought the stored row in.
            self.items[existing] = record;
            if let Some(index) = temp_index {
                self.items.remove(index);
            }
            return;
        }
        match temp_index {
            Some(index) => self.items[index] = record,
            None => self.items.insert(0, record),
        }
    }
}

/// Local mirror of one remote collection with optimistic mutations.
///
/// Cloning is cheap and every clone shares the same list, so a UI can hand a
/// clone to each control and let several operations run at once. Operations on
/// the same id are serialized only when `single_flight` is enabled in
/// [`StoreConfig`]; otherwise the last state transition to run wins.
pub struct OptimisticListStore<R: ListRecord> {
    config: Arc<StoreConfig>,
    state: Arc<Mutex<ListState<R>>>,
    remote: Arc<dyn RemoteDataService<R>>,
    notifier: Arc<dyn Notifier>,
}

impl<R: ListRecord> Clone for OptimisticListStore<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone(),
            remote: self.remote.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<R: ListRecord> OptimisticListStore<R> {
    pub fn new(initial: Vec<R>, remote: Arc<dyn RemoteDataService<R>>) -> Self {
        Self::with_config(initial, remote, StoreConfig::default())
    }

    /// Later duplicates of an id in `initial` are dropped.
    pub fn with_config(
        initial: Vec<R>,
        remote: Arc<dyn RemoteDataService<R>>,
        config: StoreConfig,
    ) -> Self {
        let temp_ids = TempIdGenerator::new(config.temp_id_prefix.clone());
        Self {
            config: Arc::new(config),
            state: Arc::new(Mutex::new(ListState {
                items: dedup_by_id(initial),
                loading: false,
                error: None,
                in_flight: HashMap::new(),
                temp_ids,
            })),
            remote,
            notifier: Arc::new(NoopNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether `id` carries this store's temporary id marker.
    pub fn is_temporary_id(&self, id: &str) -> bool {
        id.starts_with(&self.config.temp_id_prefix)
    }

    pub async fn items(&self) -> Vec<R> {
        self.state.lock().await.items.clone()
    }

    pub async fn get(&self, id: &str) -> Option<R> {
        let state = self.state.lock().await;
        state.position(id).map(|index| state.items[index].clone())
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.items.is_empty()
    }

    pub async fn loading(&self) -> bool {
        self.state.lock().await.loading
    }

    /// Message of the last failed mutation, cleared by the next confirmed one.
    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    pub async fn snapshot(&self) -> ListSnapshot<R> {
        let state = self.state.lock().await;
        ListSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Ids with an operation currently awaiting the remote, sorted.
    pub async fn in_flight(&self) -> Vec<String> {
        let state = self.state.lock().await;
        let mut ids: Vec<String> = state.in_flight.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn busy(&self, state: &ListState<R>, id: &str) -> bool {
        self.config.single_flight && state.in_flight.contains_key(id)
    }

    /// Emits the single notification a settled mutation owes and hands the outcome back.
    fn finish(&self, kind: MutationKind, outcome: MutationOutcome) -> MutationOutcome {
        match &outcome {
            MutationOutcome::Confirmed => self.notifier.notify(
                NoticeKind::Success,
                SUCCESS_TITLE,
                Some(&self.config.success_message(kind)),
            ),
            MutationOutcome::RolledBack { .. } | MutationOutcome::Invalid { .. } => {
                self.notifier.notify(
                    NoticeKind::Error,
                    ERROR_TITLE,
                    Some(&self.config.failure_message(kind)),
                )
            }
            MutationOutcome::NotFound | MutationOutcome::Busy => {}
        }
        outcome
    }
}
