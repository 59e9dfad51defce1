use async_trait::async_trait;
use labtrack_db::{TicketModel, Update};
use std::error::Error;

use super::repo_impl::{TicketRepositoryImpl, TICKET_COLUMNS};
use crate::utils::TryFromRow;

impl TicketRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &TicketRepositoryImpl,
        item: TicketModel,
    ) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            UPDATE ticket SET
                title = $2,
                status = $3,
                asset_id = $4
            WHERE id = $1
            RETURNING {TICKET_COLUMNS}
            "#
        );
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(item.id)
                .bind(&item.title)
                .bind(item.status)
                .bind(item.asset_id)
                .fetch_optional(&mut **transaction)
                .await?
        };
        match row {
            Some(row) => TicketModel::try_from_row(&row),
            None => Err(format!("Ticket {} not found", item.id).into()),
        }
    }
}

#[async_trait]
impl Update<TicketModel> for TicketRepositoryImpl {
    async fn update(&self, item: TicketModel) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::ticket::ticket_repository::test_utils::create_test_ticket;
    use crate::test_helper::setup_test_context;
    use labtrack_api::TicketStatus;
    use labtrack_db::{Create, Load, UnitOfWorkSession, Update};

    #[tokio::test]
    #[ignore]
    async fn test_update() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ticket_repo = ctx.session().tickets();

        let mut saved = ticket_repo.create(create_test_ticket("Fume hood alarm", 5)).await?;
        saved.status = TicketStatus::InProgress;
        let updated = ticket_repo.update(saved.clone()).await?;

        assert_eq!(updated, saved);
        assert_eq!(ticket_repo.load(saved.id).await?.map(|t| t.status), Some(TicketStatus::InProgress));

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_update_missing_ticket() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let mut ghost = create_test_ticket("ghost", 1);
        ghost.id = i64::MAX;
        assert!(ctx.session().tickets().update(ghost).await.is_err());
        Ok(())
    }
}
