use labtrack_api::{AuditEntity, Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

use crate::models::{Auditable, Identifiable};

/// Row of the `ticket` table.
///
/// `id` is assigned by the store on create; the value passed in is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketModel {
    pub id: i64,
    pub title: String,
    pub status: TicketStatus,
    pub asset_id: i64,
}

impl TicketModel {
    /// A not yet persisted ticket in its initial status.
    pub fn new_open(title: impl Into<String>, asset_id: i64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            status: TicketStatus::Open,
            asset_id,
        }
    }
}

impl Identifiable for TicketModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Auditable for TicketModel {
    const AUDIT_ENTITY: AuditEntity = AuditEntity::Ticket;
}

impl From<TicketModel> for Ticket {
    fn from(model: TicketModel) -> Self {
        Ticket {
            id: model.id,
            title: model.title,
            status: model.status,
            asset_id: model.asset_id,
        }
    }
}
