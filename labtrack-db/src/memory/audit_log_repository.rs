use std::sync::Arc;

use async_trait::async_trait;
use labtrack_api::{AuditEntity, Page, PageRequest};

use super::session::SessionState;
use crate::models::AuditLogModel;
use crate::repository::{Create, FindByEntity, Load, RepositoryResult};

pub struct MemoryAuditLogRepository {
    state: Arc<SessionState>,
}

impl MemoryAuditLogRepository {
    pub(crate) fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    fn visible(&self) -> Vec<AuditLogModel> {
        let mut entries = self.state.store.audit_logs.read().clone();
        entries.extend(self.state.staged.lock().audit_logs.iter().cloned());
        entries
    }
}

#[async_trait]
impl Create<AuditLogModel> for MemoryAuditLogRepository {
    async fn create(&self, mut item: AuditLogModel) -> RepositoryResult<AuditLogModel> {
        if !self.state.store.audit_available() {
            return Err("audit log store unavailable".into());
        }
        item.id = self.state.store.next_audit_id();
        item.created_at = self.state.store.stamp();
        self.state.staged.lock().audit_logs.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Load<AuditLogModel> for MemoryAuditLogRepository {
    async fn load(&self, id: i64) -> RepositoryResult<Option<AuditLogModel>> {
        Ok(self.visible().into_iter().find(|entry| entry.id == id))
    }
}

#[async_trait]
impl FindByEntity for MemoryAuditLogRepository {
    async fn find_by_entity(
        &self,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> RepositoryResult<Page<AuditLogModel>> {
        let mut matching: Vec<_> = self
            .visible()
            .into_iter()
            .filter(|entry| entry.entity == entity && entry.entity_id == entity_id)
            .collect();
        matching.sort_by_key(|entry| (entry.created_at, entry.id));
        Ok(Page::from_ordered(matching, page))
    }
}
