//! Domain Layer - Core Entity Trait
//!
//! Every record the backend hands out carries a numeric identity.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Linear lookup by id over a snapshot slice
pub fn find_by_id<T: Entity>(entities: &[T], id: T::Id) -> Option<&T> {
    entities.iter().find(|entity| entity.id() == id)
}
