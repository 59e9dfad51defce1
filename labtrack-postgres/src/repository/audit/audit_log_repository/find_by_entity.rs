use async_trait::async_trait;
use labtrack_api::{AuditEntity, Page, PageRequest};
use labtrack_db::{AuditLogModel, FindByEntity};
use std::error::Error;

use super::repo_impl::{AuditLogRepositoryImpl, AUDIT_LOG_COLUMNS};

impl AuditLogRepositoryImpl {
    pub(super) async fn find_by_entity_impl(
        repo: &AuditLogRepositoryImpl,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> Result<Page<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            SELECT {AUDIT_LOG_COLUMNS}
            FROM audit_log
            WHERE entity = $1 AND entity_id = $2
            ORDER BY created_at ASC, id ASC
            LIMIT $3 OFFSET $4
            "#
        );

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM audit_log WHERE entity = $1 AND entity_id = $2",
        )
        .bind(entity)
        .bind(entity_id)
        .fetch_one(&mut **transaction)
        .await?;

        let items = sqlx::query_as::<_, AuditLogModel>(&query)
            .bind(entity)
            .bind(entity_id)
            .bind(i64::try_from(page.limit)?)
            .bind(i64::try_from(page.offset)?)
            .fetch_all(&mut **transaction)
            .await?;

        Ok(Page::new(items, usize::try_from(total)?, page.limit, page.offset))
    }
}

#[async_trait]
impl FindByEntity for AuditLogRepositoryImpl {
    async fn find_by_entity(
        &self,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> Result<Page<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_entity_impl(self, entity, entity_id, page).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use labtrack_api::{AuditAction, AuditEntity, CallerContext, PageRequest, Role};
    use labtrack_db::{AuditLogModel, Create, FindByEntity, Load, UnitOfWorkSession};

    #[tokio::test]
    #[ignore]
    async fn test_find_by_entity_orders_oldest_first() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_log_repo = ctx.session().audit_logs();
        let caller = CallerContext::new(5, Role::Admin);
        // An id no other test uses, so counts are exact.
        let entity_id = i64::MAX - 17;

        let mut created = Vec::new();
        for action in [AuditAction::Create, AuditAction::StatusChange, AuditAction::StatusChange] {
            let entry = AuditLogModel::new(&caller, action, AuditEntity::Ticket, entity_id);
            created.push(audit_log_repo.create(entry).await?);
        }
        audit_log_repo
            .create(AuditLogModel::new(&caller, AuditAction::Create, AuditEntity::Comment, entity_id))
            .await?;

        let page = audit_log_repo
            .find_by_entity(AuditEntity::Ticket, entity_id, PageRequest::new(2, 0))
            .await?;
        assert_eq!(page.total, 3);
        assert_eq!(page.items, created[..2].to_vec());
        assert!(page.has_more());

        let rest = audit_log_repo
            .find_by_entity(AuditEntity::Ticket, entity_id, PageRequest::new(2, 2))
            .await?;
        assert_eq!(rest.items, created[2..].to_vec());
        assert!(page.items[1].created_at <= rest.items[0].created_at);

        assert_eq!(audit_log_repo.load(created[0].id).await?, Some(created[0].clone()));

        Ok(())
    }
}
