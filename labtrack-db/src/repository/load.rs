use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::RepositoryResult;

/// Generic repository trait for loading entities by their ID
///
/// Reads take no lock; use [`LoadForUpdate`](super::LoadForUpdate) when the
/// loaded value decides a write.
///
/// # Example
/// ```ignore
/// impl Load<TicketModel> for TicketRepositoryImpl {
///     async fn load(&self, id: i64) -> RepositoryResult<Option<TicketModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The loaded entity
    /// * `Ok(None)` - No entity has this id
    /// * `Err` - The store could not be read
    async fn load(&self, id: i64) -> RepositoryResult<Option<T>>;
}
