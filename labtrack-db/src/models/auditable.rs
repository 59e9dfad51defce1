use labtrack_api::AuditEntity;

use super::identifiable::Identifiable;

/// Trait for entities whose mutations are recorded in the audit log
pub trait Auditable: Identifiable {
    /// The entity kind written to `audit_log.entity`
    const AUDIT_ENTITY: AuditEntity;
}
