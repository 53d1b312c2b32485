//! Idea State Store
//!
//! The view-model owns the only writer. Screens read cloned snapshots or
//! subscribe to change notifications; they never mutate the state.

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::{find_by_id, CatalogId, CatalogItem, CatalogKind, Idea, IdeaForm, IdeaId};
use crate::error::SyncError;

/// Everything a screen renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaState {
    pub ideas: Vec<Idea>,
    pub categories: Vec<CatalogItem>,
    pub priorities: Vec<CatalogItem>,
    pub statuses: Vec<CatalogItem>,
    /// True while at least one operation is in flight
    pub loading: bool,
    /// Last failure; stays until `clear_error` or the next `load_all`
    pub error: Option<SyncError>,
    in_flight: usize,
}

impl IdeaState {
    pub fn catalog(&self, kind: CatalogKind) -> &[CatalogItem] {
        match kind {
            CatalogKind::Category => &self.categories,
            CatalogKind::Priority => &self.priorities,
            CatalogKind::Status => &self.statuses,
        }
    }

    pub fn find_idea(&self, id: IdeaId) -> Option<&Idea> {
        find_by_id(&self.ideas, id)
    }

    pub fn find_catalog_item(&self, kind: CatalogKind, id: CatalogId) -> Option<&CatalogItem> {
        find_by_id(self.catalog(kind), id)
    }

    /// Case-insensitive match on title, description or category
    pub fn filter_ideas(&self, query: &str) -> Vec<&Idea> {
        let query = query.trim().to_lowercase();
        self.ideas
            .iter()
            .filter(|idea| {
                query.is_empty()
                    || idea.title.to_lowercase().contains(&query)
                    || idea.description.to_lowercase().contains(&query)
                    || idea.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn catalogs_loaded(&self) -> bool {
        CatalogKind::ALL.iter().all(|kind| !self.catalog(*kind).is_empty())
    }

    /// Edit form for a listed idea, catalog entries pre-selected by name
    pub fn edit_form(&self, id: IdeaId) -> Option<IdeaForm> {
        self.find_idea(id).map(|idea| {
            IdeaForm::for_idea(idea, &self.categories, &self.priorities, &self.statuses)
        })
    }

    /// Operations currently started and not yet finished
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn set_catalog(&mut self, kind: CatalogKind, items: Vec<CatalogItem>) {
        match kind {
            CatalogKind::Category => self.categories = items,
            CatalogKind::Priority => self.priorities = items,
            CatalogKind::Status => self.statuses = items,
        }
    }

    fn begin_operation(&mut self) {
        self.in_flight += 1;
        self.loading = true;
    }

    fn end_operation(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
    }
}

/// Writer side of the published state
#[derive(Clone)]
pub(crate) struct IdeaStore {
    tx: Arc<watch::Sender<IdeaState>>,
}

impl IdeaStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(IdeaState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> IdeaState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<IdeaState> {
        self.tx.subscribe()
    }

    pub fn update(&self, f: impl FnOnce(&mut IdeaState)) {
        self.tx.send_modify(f);
    }

    /// Mark an operation as started; it ends when the guard drops
    pub fn begin(&self) -> LoadingGuard {
        self.update(IdeaState::begin_operation);
        LoadingGuard { store: self.clone() }
    }
}

/// Clears this operation's share of `loading` on every exit path
pub(crate) struct LoadingGuard {
    store: IdeaStore,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.store.update(IdeaState::end_operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: IdeaId, title: &str, description: &str, category: &str) -> Idea {
        Idea {
            id,
            title: title.to_string(),
            description: description.to_string(),
            resources_needed: String::new(),
            created_at: "2024-01-01".to_string(),
            category: category.to_string(),
            priority: "ALTA".to_string(),
            status: "PENDIENTE".to_string(),
        }
    }

    fn sample_state() -> IdeaState {
        IdeaState {
            ideas: vec![
                idea(1, "Mural", "Paint the wall", "ARTE"),
                idea(2, "Chorus", "Hook for the new song", "MUSICA"),
                idea(3, "Short story", "About a lighthouse", "ESCRITURA"),
            ],
            categories: vec![CatalogItem::new(1, "ARTE"), CatalogItem::new(2, "MUSICA")],
            priorities: vec![CatalogItem::new(1, "ALTA")],
            statuses: vec![CatalogItem::new(1, "PENDIENTE")],
            ..IdeaState::default()
        }
    }

    #[test]
    fn test_filter_matches_title_description_and_category() {
        let state = sample_state();

        let ids = |query: &str| state.filter_ideas(query).iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(""), vec![1, 2, 3]);
        assert_eq!(ids("mural"), vec![1]);
        assert_eq!(ids("LIGHTHOUSE"), vec![3]);
        assert_eq!(ids("musica"), vec![2]);
        assert!(ids("sculpture").is_empty());
    }

    #[test]
    fn test_find_idea_and_catalog_item() {
        let state = sample_state();
        assert_eq!(state.find_idea(2).map(|i| i.title.as_str()), Some("Chorus"));
        assert!(state.find_idea(99).is_none());
        assert_eq!(
            state.find_catalog_item(CatalogKind::Category, 2),
            Some(&CatalogItem::new(2, "MUSICA"))
        );
    }

    #[test]
    fn test_catalogs_loaded_needs_all_three() {
        let mut state = sample_state();
        assert!(state.catalogs_loaded());

        state.set_catalog(CatalogKind::Status, Vec::new());
        assert!(!state.catalogs_loaded());
    }

    #[test]
    fn test_edit_form_preselects() {
        let form = sample_state().edit_form(2).expect("idea 2 listed");
        assert_eq!(form.editing, Some(2));
        assert_eq!(form.category, Some(CatalogItem::new(2, "MUSICA")));
        assert!(sample_state().edit_form(42).is_none());
    }

    #[test]
    fn test_loading_tracks_overlapping_operations() {
        let store = IdeaStore::new();
        assert!(!store.snapshot().loading);

        let first = store.begin();
        let second = store.begin();
        assert_eq!(store.snapshot().in_flight(), 2);

        drop(first);
        assert!(store.snapshot().loading);

        drop(second);
        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let store = IdeaStore::new();
        let mut rx = store.subscribe();

        store.update(|state| state.ideas.push(idea(5, "New", "", "ARTE")));

        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow().ideas.len(), 1);
    }
}
