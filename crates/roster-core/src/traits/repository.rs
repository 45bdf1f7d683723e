//! Generic repository trait for record storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic identity-keyed repository.
///
/// Each entity gets a strongly typed repository through the type
/// parameters. Entity-specific lookups (by email, by name, ...) live on
/// extension traits defined next to the concrete implementations.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Return every entity in the store.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Check whether an entity with the given primary key exists.
    async fn exists_by_id(&self, id: Id) -> AppResult<bool>;

    /// Insert the entity if its key is new, otherwise overwrite the stored row.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: Id) -> AppResult<bool>;
}
