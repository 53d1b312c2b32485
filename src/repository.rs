//! Repository Layer
//!
//! Single entry point the view-model talks to. Delegates every call to the
//! remote interfaces without adding behaviour.

use std::sync::Arc;

use crate::domain::{CatalogItem, Idea, IdeaId, NewIdeaRequest};
use crate::remote::{ApiResult, CatalogApi, HttpApi, IdeaApi};

#[derive(Clone)]
pub struct IdeaRepository {
    ideas: Arc<dyn IdeaApi>,
    catalogs: Arc<dyn CatalogApi>,
}

impl IdeaRepository {
    pub fn new(ideas: Arc<dyn IdeaApi>, catalogs: Arc<dyn CatalogApi>) -> Self {
        Self { ideas, catalogs }
    }

    /// Both interfaces served by one HTTP client
    pub fn from_http(api: HttpApi) -> Self {
        let api = Arc::new(api);
        Self::new(api.clone(), api)
    }

    // Ideas

    pub async fn get_ideas(&self) -> ApiResult<Vec<Idea>> {
        self.ideas.list_ideas().await
    }

    pub async fn create_idea(&self, request: &NewIdeaRequest) -> ApiResult<Idea> {
        self.ideas.create_idea(request).await
    }

    pub async fn update_idea(&self, id: IdeaId, request: &NewIdeaRequest) -> ApiResult<Idea> {
        self.ideas.update_idea(id, request).await
    }

    pub async fn delete_idea(&self, id: IdeaId) -> ApiResult<()> {
        self.ideas.delete_idea(id).await
    }

    // Catalogs

    pub async fn get_categories(&self) -> ApiResult<Vec<CatalogItem>> {
        self.catalogs.list_categories().await
    }

    pub async fn get_priorities(&self) -> ApiResult<Vec<CatalogItem>> {
        self.catalogs.list_priorities().await
    }

    pub async fn get_statuses(&self) -> ApiResult<Vec<CatalogItem>> {
        self.catalogs.list_statuses().await
    }
}
