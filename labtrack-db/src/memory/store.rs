use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};

use super::session::MemorySession;
use crate::models::{AuditLogModel, TicketModel};
use crate::repository::{RepositoryResult, UnitOfWork};

/// Shared, committed state of the in-process store.
#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) tickets: RwLock<BTreeMap<i64, TicketModel>>,
    pub(crate) audit_logs: RwLock<Vec<AuditLogModel>>,
    ticket_locks: Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>,
    ticket_seq: AtomicI64,
    audit_seq: AtomicI64,
    last_created_at: Mutex<Option<DateTime<Utc>>>,
    audit_unavailable: AtomicBool,
}

impl StoreInner {
    pub(crate) fn ticket_lock(&self, id: i64) -> Arc<tokio::sync::Mutex<()>> {
        self.ticket_locks.lock().entry(id).or_default().clone()
    }

    pub(crate) fn next_ticket_id(&self) -> i64 {
        self.ticket_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn next_audit_id(&self) -> i64 {
        self.audit_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Creation timestamp that never goes backwards, even if the wall clock does.
    pub(crate) fn stamp(&self) -> DateTime<Utc> {
        let mut last = self.last_created_at.lock();
        let now = Utc::now();
        let stamped = match *last {
            Some(previous) if previous > now => previous,
            _ => now,
        };
        *last = Some(stamped);
        stamped
    }

    pub(crate) fn audit_available(&self) -> bool {
        !self.audit_unavailable.load(Ordering::SeqCst)
    }
}

/// In-process store for tickets and audit entries.
///
/// Cloning is cheap; clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(crate) inner: Arc<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an outage of the audit log: while unavailable every append fails.
    pub fn set_audit_available(&self, available: bool) {
        self.inner.audit_unavailable.store(!available, Ordering::SeqCst);
    }

    /// Committed audit entries in append order.
    pub fn committed_audit_logs(&self) -> Vec<AuditLogModel> {
        self.inner.audit_logs.read().clone()
    }

    pub fn committed_ticket(&self, id: i64) -> Option<TicketModel> {
        self.inner.tickets.read().get(&id).cloned()
    }
}

#[async_trait]
impl UnitOfWork for MemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> RepositoryResult<MemorySession> {
        Ok(MemorySession::new(self.inner.clone()))
    }
}
