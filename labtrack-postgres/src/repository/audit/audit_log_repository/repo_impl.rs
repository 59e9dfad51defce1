use crate::unit_of_work::Executor;

pub(crate) const AUDIT_LOG_COLUMNS: &str = "id, user_id, action, entity, entity_id, created_at";

/// Append-only access to `audit_log`. The table rejects updates and deletes.
pub struct AuditLogRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AuditLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
