use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::RepositoryResult;

/// Generic repository trait for overwriting an existing entity
///
/// # Returns
/// * `Ok(T)` - The stored entity
/// * `Err` - The entity does not exist or the write failed
#[async_trait]
pub trait Update<T: Identifiable>: Send + Sync {
    async fn update(&self, item: T) -> RepositoryResult<T>;
}
