//! Idea Entity
//!
//! Read model returned by `GET /api/ideas` and the write request accepted by
//! `POST /api/ideas` and `PUT /api/ideas/{id}`.

use serde::{Deserialize, Serialize};
use super::catalog::CatalogId;
use super::entity::Entity;

/// Server-assigned idea id; 0 means "not saved yet"
pub type IdeaId = i64;

/// An idea as the server returns it.
///
/// Category, priority and status come back as catalog *names*, not ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "recursosNecesarios", default)]
    pub resources_needed: String,
    /// Server-formatted, kept opaque
    #[serde(rename = "fechaCreacion", default)]
    pub created_at: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "prioridad")]
    pub priority: String,
    #[serde(rename = "estado")]
    pub status: String,
}

impl Idea {
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

impl Entity for Idea {
    type Id = IdeaId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of a create or update call. Catalog values are sent as ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdeaRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: CatalogId,
    #[serde(rename = "prioridad")]
    pub priority: CatalogId,
    #[serde(rename = "estado")]
    pub status: CatalogId,
    #[serde(rename = "recursosNecesarios")]
    pub resources_needed: String,
}

impl NewIdeaRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: CatalogId,
        priority: CatalogId,
        status: CatalogId,
        resources_needed: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority,
            status,
            resources_needed: resources_needed.into(),
        }
    }
}
