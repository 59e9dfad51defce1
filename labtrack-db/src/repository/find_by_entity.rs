use async_trait::async_trait;
use labtrack_api::{AuditEntity, Page, PageRequest};

use crate::models::AuditLogModel;
use crate::repository::RepositoryResult;

/// Repository trait for reading the audit trail of one entity instance
#[async_trait]
pub trait FindByEntity: Send + Sync {
    /// Load one page of audit entries for `entity`/`entity_id`
    ///
    /// Entries are ordered by `created_at` ascending, ties broken by `id`.
    /// Re-issuing the same request returns the same page as long as no new
    /// entry was appended for the entity.
    async fn find_by_entity(
        &self,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> RepositoryResult<Page<AuditLogModel>>;
}
