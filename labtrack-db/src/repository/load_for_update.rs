use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::RepositoryResult;

/// Loads an entity and takes an exclusive lock on it for the rest of the
/// unit of work.
///
/// A second session asking for the same id waits until the first one commits
/// or rolls back, and then sees the committed state.
#[async_trait]
pub trait LoadForUpdate<T: Identifiable>: Send + Sync {
    async fn load_for_update(&self, id: i64) -> RepositoryResult<Option<T>>;
}
