use async_trait::async_trait;
use labtrack_db::{Load, TicketModel};
use std::error::Error;

use super::repo_impl::{TicketRepositoryImpl, TICKET_COLUMNS};
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &TicketRepositoryImpl,
        id: i64,
        for_update: bool,
    ) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        let lock_clause = if for_update { " FOR UPDATE" } else { "" };
        let query = format!("SELECT {TICKET_COLUMNS} FROM ticket WHERE id = $1{lock_clause}");
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(id)
                .fetch_optional(&mut **transaction)
                .await?
        };
        row.as_ref().map(TicketModel::try_from_row).transpose()
    }
}

#[async_trait]
impl Load<TicketModel> for TicketRepositoryImpl {
    async fn load(&self, id: i64) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id, false).await
    }
}
