//! Idea endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiResult, HttpApi};
use crate::domain::{Idea, IdeaId, NewIdeaRequest};

/// Idea CRUD as exposed by `/api/ideas`
#[async_trait]
pub trait IdeaApi: Send + Sync {
    /// `GET /api/ideas`
    async fn list_ideas(&self) -> ApiResult<Vec<Idea>>;

    /// `POST /api/ideas`
    async fn create_idea(&self, request: &NewIdeaRequest) -> ApiResult<Idea>;

    /// `PUT /api/ideas/{id}`
    async fn update_idea(&self, id: IdeaId, request: &NewIdeaRequest) -> ApiResult<Idea>;

    /// `DELETE /api/ideas/{id}`
    async fn delete_idea(&self, id: IdeaId) -> ApiResult<()>;
}

fn idea_path(id: IdeaId) -> String {
    format!("api/ideas/{}", id)
}

#[async_trait]
impl IdeaApi for HttpApi {
    async fn list_ideas(&self) -> ApiResult<Vec<Idea>> {
        self.get_json("api/ideas").await
    }

    async fn create_idea(&self, request: &NewIdeaRequest) -> ApiResult<Idea> {
        self.send_json(Method::POST, "api/ideas", request).await
    }

    async fn update_idea(&self, id: IdeaId, request: &NewIdeaRequest) -> ApiResult<Idea> {
        self.send_json(Method::PUT, &idea_path(id), request).await
    }

    async fn delete_idea(&self, id: IdeaId) -> ApiResult<()> {
        self.delete(&idea_path(id)).await
    }
}
