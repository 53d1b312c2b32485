//! Catalog Entity
//!
//! One allowed value for a category, priority or status.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub type CatalogId = i32;

/// A catalog entry as returned by the catalog endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl CatalogItem {
    pub fn new(id: CatalogId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// Name as shown in pickers: `"ARTE"` becomes `"Arte"`
    pub fn display_name(&self) -> String {
        display_label(&self.name)
    }

    /// Whether an idea's read-side string refers to this entry
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl Entity for CatalogItem {
    type Id = CatalogId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Capitalize a catalog name for display. Ideas carry the raw names too.
pub fn display_label(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The three independent catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Category,
    Priority,
    Status,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Category,
        CatalogKind::Priority,
        CatalogKind::Status,
    ];

    /// Path segment under `/api/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            CatalogKind::Category => "categorias",
            CatalogKind::Priority => "prioridades",
            CatalogKind::Status => "estados",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Category => "category",
            CatalogKind::Priority => "priority",
            CatalogKind::Status => "status",
        }
    }
}
