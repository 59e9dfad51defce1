use async_trait::async_trait;

use crate::domain::{AuditAction, AuditEntity, AuditEntry, CallerContext};
use crate::error::ApiResult;
use crate::pagination::{Page, PageRequest};

/// Write-once, read-many audit trail.
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Appends one entry attributed to `caller` in its own unit of work.
    async fn record(
        &self,
        caller: &CallerContext,
        action: AuditAction,
        entity: AuditEntity,
        entity_id: i64,
    ) -> ApiResult<AuditEntry>;

    /// Entries for one entity instance, oldest first.
    async fn query_by_entity(
        &self,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> ApiResult<Page<AuditEntry>>;
}
