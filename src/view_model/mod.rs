//! Idea View-Model
//!
//! Owns the idea and catalog snapshots and keeps them in step with the
//! backend. Every mutation is followed by a full re-fetch of the idea list;
//! the server's response replaces the local list, nothing is patched in
//! place.
//!
//! Operations run one at a time: a call made while another is in flight
//! waits for it, so the list always reflects the re-fetch of the last
//! issued operation. `loading` stays true from the moment an operation is
//! invoked (including while it waits) until it returns or is dropped.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::domain::{CatalogKind, IdeaForm, IdeaId, NewIdeaRequest};
use crate::error::{Operation, SaveError, SyncError};
use crate::remote::ApiResult;
use crate::repository::IdeaRepository;
use crate::store::{IdeaState, IdeaStore};


#[derive(Clone)]
pub struct IdeaViewModel {
    repository: IdeaRepository,
    store: IdeaStore,
    gate: Arc<Mutex<()>>,
}

impl IdeaViewModel {
    pub fn new(repository: IdeaRepository) -> Self {
        Self {
            repository,
            store: IdeaStore::new(),
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Current state, cloned
    pub fn snapshot(&self) -> IdeaState {
        self.store.snapshot()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<IdeaState> {
        self.store.subscribe()
    }

    // ========================
    // Loading
    // ========================

    /// Fetch ideas and the three catalogs concurrently.
    ///
    /// Each successful fetch replaces its own slot even when a sibling
    /// fails. The first failure, in the order ideas, categories,
    /// priorities, statuses, is reported.
    pub async fn load_all(&self) -> Result<(), SyncError> {
        let _loading = self.store.begin();
        let _turn = self.gate.lock().await;
        self.store.update(|state| state.error = None);

        let (ideas, categories, priorities, statuses) = tokio::join!(
            self.refresh_ideas(),
            self.refresh_catalog(CatalogKind::Category),
            self.refresh_catalog(CatalogKind::Priority),
            self.refresh_catalog(CatalogKind::Status),
        );

        self.finish(Operation::LoadAll, ideas.and(categories).and(priorities).and(statuses))
    }

    /// `load_all`, skipped when the category catalog is already present
    pub async fn load_all_if_needed(&self) -> Result<(), SyncError> {
        if self.snapshot().categories.is_empty() {
            self.load_all().await
        } else {
            Ok(())
        }
    }

    pub async fn load_ideas(&self) -> Result<(), SyncError> {
        let _loading = self.store.begin();
        let _turn = self.gate.lock().await;

        let outcome = self.refresh_ideas().await;
        self.finish(Operation::LoadIdeas, outcome)
    }

    // ========================
    // Mutations
    // ========================

    /// Create, then re-fetch the list. The create response is not merged.
    pub async fn create_idea(&self, request: NewIdeaRequest) -> Result<(), SyncError> {
        let _loading = self.store.begin();
        let _turn = self.gate.lock().await;

        let outcome = self.create_then_refresh(&request).await;
        self.finish(Operation::CreateIdea, outcome)
    }

    pub async fn update_idea(&self, id: IdeaId, request: NewIdeaRequest) -> Result<(), SyncError> {
        let _loading = self.store.begin();
        let _turn = self.gate.lock().await;

        let outcome = self.update_then_refresh(id, &request).await;
        self.finish(Operation::UpdateIdea, outcome)
    }

    pub async fn delete_idea(&self, id: IdeaId) -> Result<(), SyncError> {
        let _loading = self.store.begin();
        let _turn = self.gate.lock().await;

        let outcome = self.delete_then_refresh(id).await;
        self.finish(Operation::DeleteIdea, outcome)
    }

    /// Validate the form, then create or update depending on `form.editing`.
    /// Nothing is sent when validation fails.
    pub async fn save(&self, form: &IdeaForm) -> Result<(), SaveError> {
        let request = form.to_request().map_err(SaveError::Invalid)?;
        match form.editing {
            Some(id) => self.update_idea(id, request).await?,
            None => self.create_idea(request).await?,
        }
        Ok(())
    }

    pub fn clear_error(&self) {
        self.store.update(|state| state.error = None);
    }

    // ========================
    // Steps
    // ========================

    async fn refresh_ideas(&self) -> ApiResult<()> {
        let ideas = self.repository.get_ideas().await?;
        log::debug!("fetched {} ideas", ideas.len());
        self.store.update(|state| state.ideas = ideas);
        Ok(())
    }

    async fn refresh_catalog(&self, kind: CatalogKind) -> ApiResult<()> {
        let items = match kind {
            CatalogKind::Category => self.repository.get_categories().await?,
            CatalogKind::Priority => self.repository.get_priorities().await?,
            CatalogKind::Status => self.repository.get_statuses().await?,
        };
        log::debug!("fetched {} {} entries", items.len(), kind.label());
        self.store.update(|state| state.set_catalog(kind, items));
        Ok(())
    }

    async fn create_then_refresh(&self, request: &NewIdeaRequest) -> ApiResult<()> {
        let created = self.repository.create_idea(request).await?;
        log::debug!("created idea {}", created.id);
        self.refresh_ideas().await
    }

    async fn update_then_refresh(&self, id: IdeaId, request: &NewIdeaRequest) -> ApiResult<()> {
        self.repository.update_idea(id, request).await?;
        self.refresh_ideas().await
    }

    async fn delete_then_refresh(&self, id: IdeaId) -> ApiResult<()> {
        self.repository.delete_idea(id).await?;
        self.refresh_ideas().await
    }

    /// Publish a failure as the current error; success leaves `error` alone
    fn finish(&self, operation: Operation, outcome: ApiResult<()>) -> Result<(), SyncError> {
        match outcome {
            Ok(()) => {
                log::info!("{} completed", operation);
                Ok(())
            }
            Err(source) => {
                let err = SyncError::new(operation, source);
                log::warn!("{}", err);
                self.store.update(|state| state.error = Some(err.clone()));
                Err(err)
            }
        }
    }
}
