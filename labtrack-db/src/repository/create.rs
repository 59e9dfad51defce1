use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::RepositoryResult;

/// Generic repository trait for creating one entity
///
/// The store assigns generated fields (ids, timestamps); the returned value
/// carries them. Nothing is visible outside the unit of work before commit.
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    async fn create(&self, item: T) -> RepositoryResult<T>;
}
