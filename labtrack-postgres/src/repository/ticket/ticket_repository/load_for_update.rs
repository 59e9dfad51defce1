use async_trait::async_trait;
use labtrack_db::{LoadForUpdate, TicketModel};
use std::error::Error;

use super::repo_impl::TicketRepositoryImpl;

#[async_trait]
impl LoadForUpdate<TicketModel> for TicketRepositoryImpl {
    /// `SELECT … FOR UPDATE`: the row stays locked until the transaction ends.
    async fn load_for_update(&self, id: i64) -> Result<Option<TicketModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id, true).await
    }
}
