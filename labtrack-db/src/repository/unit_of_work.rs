use async_trait::async_trait;

use crate::models::{AuditLogModel, TicketModel};
use crate::repository::{
    Create, FindByEntity, FindByStatus, Load, LoadForUpdate, RepositoryResult, Update,
};

/// Everything the workflow needs from ticket storage.
pub trait TicketRepository:
    Load<TicketModel>
    + LoadForUpdate<TicketModel>
    + Create<TicketModel>
    + Update<TicketModel>
    + FindByStatus
{
}

impl<T> TicketRepository for T where
    T: Load<TicketModel>
        + LoadForUpdate<TicketModel>
        + Create<TicketModel>
        + Update<TicketModel>
        + FindByStatus
{
}

/// Append and read access to the audit log. There is no update or delete.
pub trait AuditLogRepository: Load<AuditLogModel> + Create<AuditLogModel> + FindByEntity {}

impl<T> AuditLogRepository for T where T: Load<AuditLogModel> + Create<AuditLogModel> + FindByEntity {}

/// Source of units of work.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Session: UnitOfWorkSession;

    /// Begin a new unit of work.
    async fn begin(&self) -> RepositoryResult<Self::Session>;
}

/// One atomic group of reads and writes.
///
/// Writes made through the session's repositories become visible to other
/// sessions only on [`commit`](UnitOfWorkSession::commit). Dropping a session
/// without committing rolls it back and releases its locks.
#[async_trait]
pub trait UnitOfWorkSession: Send + Sync + Sized {
    type Tickets: TicketRepository;
    type AuditLogs: AuditLogRepository;

    fn tickets(&self) -> &Self::Tickets;

    fn audit_logs(&self) -> &Self::AuditLogs;

    async fn commit(self) -> RepositoryResult<()>;

    async fn rollback(self) -> RepositoryResult<()>;
}
