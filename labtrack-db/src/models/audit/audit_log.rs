use chrono::{DateTime, Utc};
use labtrack_api::{AuditAction, AuditEntity, AuditEntry, CallerContext};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::Identifiable;

/// # Documentation
/// - One row per accepted mutation of a tracked entity.
/// - `id` and `created_at` are assigned by the store when the row is appended.
/// - Rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub user_id: i64,
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}

impl AuditLogModel {
    /// An entry attributed to `caller`, ready to be appended.
    pub fn new(caller: &CallerContext, action: AuditAction, entity: AuditEntity, entity_id: i64) -> Self {
        Self {
            id: 0,
            user_id: caller.user_id,
            action,
            entity,
            entity_id,
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for AuditLogModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl From<AuditLogModel> for AuditEntry {
    fn from(model: AuditLogModel) -> Self {
        AuditEntry {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            entity: model.entity,
            entity_id: model.entity_id,
            created_at: model.created_at,
        }
    }
}
