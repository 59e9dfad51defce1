use async_trait::async_trait;
use labtrack_api::TicketStatus;

use crate::models::TicketModel;
use crate::repository::RepositoryResult;

/// Lists tickets ordered by id; `None` lists every ticket.
#[async_trait]
pub trait FindByStatus: Send + Sync {
    async fn find_by_status(&self, status: Option<TicketStatus>) -> RepositoryResult<Vec<TicketModel>>;
}
