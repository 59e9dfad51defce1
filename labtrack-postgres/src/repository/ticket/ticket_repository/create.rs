use async_trait::async_trait;
use labtrack_db::{Create, TicketModel};
use std::error::Error;

use super::repo_impl::{TicketRepositoryImpl, TICKET_COLUMNS};
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &TicketRepositoryImpl,
        item: TicketModel,
    ) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "INSERT INTO ticket (title, status, asset_id) VALUES ($1, $2, $3) RETURNING {TICKET_COLUMNS}"
        );
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(&item.title)
                .bind(item.status)
                .bind(item.asset_id)
                .fetch_one(&mut **transaction)
                .await?
        };
        TicketModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<TicketModel> for TicketRepositoryImpl {
    async fn create(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
