use std::sync::Arc;

use async_trait::async_trait;
use labtrack_db::{RepositoryResult, UnitOfWork, UnitOfWorkSession};
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

use crate::repository::audit::AuditLogRepositoryImpl;
use crate::repository::ticket::TicketRepositoryImpl;

/// Shared handle on one open transaction.
///
/// Every repository of a session holds a clone; the transaction is taken out
/// on commit or rollback, after which any further query fails.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    async fn take(&self) -> RepositoryResult<Transaction<'static, Postgres>> {
        self.tx
            .lock()
            .await
            .take()
            .ok_or_else(|| "Transaction has been consumed".into())
    }
}

/// Begins one database transaction per unit of work.
#[derive(Clone)]
pub struct PostgresUnitOfWork {
    pool: Arc<PgPool>,
}

impl PostgresUnitOfWork {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    type Session = PostgresSession;

    async fn begin(&self) -> RepositoryResult<PostgresSession> {
        let tx = self.pool.begin().await?;
        Ok(PostgresSession::new(Executor::new(tx)))
    }
}

/// Repositories sharing a single transaction.
///
/// Dropping the session without committing rolls the transaction back, which
/// also releases any row locks taken with `FOR UPDATE`.
pub struct PostgresSession {
    executor: Executor,
    tickets: TicketRepositoryImpl,
    audit_logs: AuditLogRepositoryImpl,
}

impl PostgresSession {
    pub fn new(executor: Executor) -> Self {
        Self {
            tickets: TicketRepositoryImpl::new(executor.clone()),
            audit_logs: AuditLogRepositoryImpl::new(executor.clone()),
            executor,
        }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

#[async_trait]
impl UnitOfWorkSession for PostgresSession {
    type Tickets = TicketRepositoryImpl;
    type AuditLogs = AuditLogRepositoryImpl;

    fn tickets(&self) -> &TicketRepositoryImpl {
        &self.tickets
    }

    fn audit_logs(&self) -> &AuditLogRepositoryImpl {
        &self.audit_logs
    }

    async fn commit(self) -> RepositoryResult<()> {
        self.executor.take().await?.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> RepositoryResult<()> {
        self.executor.take().await?.rollback().await?;
        Ok(())
    }
}
