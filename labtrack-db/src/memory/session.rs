use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::OwnedMutexGuard;

use super::audit_log_repository::MemoryAuditLogRepository;
use super::store::StoreInner;
use super::ticket_repository::MemoryTicketRepository;
use crate::models::{AuditLogModel, TicketModel};
use crate::repository::{RepositoryResult, UnitOfWorkSession};

/// Writes not yet visible outside the session.
#[derive(Default)]
pub(crate) struct Staged {
    pub(crate) tickets: BTreeMap<i64, TicketModel>,
    pub(crate) audit_logs: Vec<AuditLogModel>,
}

/// State shared by the repositories of one session.
pub(crate) struct SessionState {
    pub(crate) store: Arc<StoreInner>,
    pub(crate) staged: Mutex<Staged>,
    held_locks: Mutex<HashMap<i64, OwnedMutexGuard<()>>>,
}

impl SessionState {
    /// Waits for the exclusive lock on ticket `id`. Re-entrant within a session.
    pub(crate) async fn lock_ticket(&self, id: i64) {
        let already_held = self.held_locks.lock().contains_key(&id);
        if already_held {
            return;
        }
        let guard = self.store.ticket_lock(id).lock_owned().await;
        self.held_locks.lock().insert(id, guard);
    }
}

pub struct MemorySession {
    state: Arc<SessionState>,
    tickets: MemoryTicketRepository,
    audit_logs: MemoryAuditLogRepository,
}

impl MemorySession {
    pub(crate) fn new(store: Arc<StoreInner>) -> Self {
        let state = Arc::new(SessionState {
            store,
            staged: Mutex::new(Staged::default()),
            held_locks: Mutex::new(HashMap::new()),
        });
        Self {
            tickets: MemoryTicketRepository::new(state.clone()),
            audit_logs: MemoryAuditLogRepository::new(state.clone()),
            state,
        }
    }
}

#[async_trait]
impl UnitOfWorkSession for MemorySession {
    type Tickets = MemoryTicketRepository;
    type AuditLogs = MemoryAuditLogRepository;

    fn tickets(&self) -> &MemoryTicketRepository {
        &self.tickets
    }

    fn audit_logs(&self) -> &MemoryAuditLogRepository {
        &self.audit_logs
    }

    async fn commit(self) -> RepositoryResult<()> {
        let staged = std::mem::take(&mut *self.state.staged.lock());
        {
            let store = &self.state.store;
            let mut tickets = store.tickets.write();
            let mut audit_logs = store.audit_logs.write();
            tickets.extend(staged.tickets);
            audit_logs.extend(staged.audit_logs);
        }
        // Row locks are released when the session is dropped.
        Ok(())
    }

    async fn rollback(self) -> RepositoryResult<()> {
        Ok(())
    }
}
