//! CreativeBlock Client
//!
//! Layered architecture:
//! - domain: Idea and catalog records, the edit form
//! - remote: typed HTTP bindings to the backend
//! - repository: single pass-through over the remote interfaces
//! - store / view_model: published state and the operations that sync it

pub mod config;
pub mod domain;
pub mod error;
pub mod remote;
pub mod repository;
pub mod store;
pub mod view_model;

pub use config::{ClientConfig, ConfigError};
pub use domain::{CatalogItem, CatalogKind, FormErrors, Idea, IdeaForm, IdeaId, NewIdeaRequest};
pub use error::{Operation, SaveError, SyncError};
pub use remote::{ApiError, CatalogApi, HttpApi, IdeaApi};
pub use repository::IdeaRepository;
pub use store::IdeaState;
pub use view_model::IdeaViewModel;

/// Build a view-model talking to the backend named in `config`
pub fn connect(config: &ClientConfig) -> Result<IdeaViewModel, ConfigError> {
    let api = HttpApi::from_config(config)?;
    log::info!("backend at {}", api.base_url());
    Ok(IdeaViewModel::new(IdeaRepository::from_http(api)))
}
