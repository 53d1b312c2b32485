//! Catalog endpoints

use async_trait::async_trait;

use super::{ApiResult, HttpApi};
use crate::domain::{CatalogItem, CatalogKind};

/// Read-only catalogs: `/api/categorias`, `/api/prioridades`, `/api/estados`
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_catalog(&self, kind: CatalogKind) -> ApiResult<Vec<CatalogItem>>;

    async fn list_categories(&self) -> ApiResult<Vec<CatalogItem>> {
        self.list_catalog(CatalogKind::Category).await
    }

    async fn list_priorities(&self) -> ApiResult<Vec<CatalogItem>> {
        self.list_catalog(CatalogKind::Priority).await
    }

    async fn list_statuses(&self) -> ApiResult<Vec<CatalogItem>> {
        self.list_catalog(CatalogKind::Status).await
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn list_catalog(&self, kind: CatalogKind) -> ApiResult<Vec<CatalogItem>> {
        self.get_json(&format!("api/{}", kind.endpoint())).await
    }
}
