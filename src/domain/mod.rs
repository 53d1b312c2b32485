//! Domain Layer
//!
//! Records mirroring the backend's JSON shapes plus the form model used to
//! build write requests. No I/O happens here.

mod entity;
mod idea;
mod catalog;
mod form;

pub use entity::{find_by_id, Entity};
pub use idea::{Idea, IdeaId, NewIdeaRequest};
pub use catalog::{display_label, CatalogId, CatalogItem, CatalogKind};
pub use form::{FormErrors, IdeaForm};
