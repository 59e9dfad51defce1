use async_trait::async_trait;
use labtrack_api::TicketStatus;
use labtrack_db::{FindByStatus, TicketModel};
use std::error::Error;

use super::repo_impl::{TicketRepositoryImpl, TICKET_COLUMNS};
use crate::utils::try_from_rows;

impl TicketRepositoryImpl {
    pub(super) async fn find_by_status_impl(
        repo: &TicketRepositoryImpl,
        status: Option<TicketStatus>,
    ) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {TICKET_COLUMNS} FROM ticket WHERE ($1::ticket_status IS NULL OR status = $1) ORDER BY id"
        );
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(status)
                .fetch_all(&mut **transaction)
                .await?
        };
        try_from_rows(&rows)
    }
}

#[async_trait]
impl FindByStatus for TicketRepositoryImpl {
    async fn find_by_status(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_status_impl(self, status).await
    }
}
