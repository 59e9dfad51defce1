use async_trait::async_trait;
use labtrack_db::{AuditLogModel, Create};
use std::error::Error;

use super::repo_impl::{AuditLogRepositoryImpl, AUDIT_LOG_COLUMNS};

impl AuditLogRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AuditLogRepositoryImpl,
        audit_log: AuditLogModel,
    ) -> Result<AuditLogModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            INSERT INTO audit_log (user_id, action, entity, entity_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {AUDIT_LOG_COLUMNS}
            "#
        );

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let saved = sqlx::query_as::<_, AuditLogModel>(&query)
            .bind(audit_log.user_id)
            .bind(audit_log.action)
            .bind(audit_log.entity)
            .bind(audit_log.entity_id)
            .fetch_one(&mut **transaction)
            .await?;

        Ok(saved)
    }
}

#[async_trait]
impl Create<AuditLogModel> for AuditLogRepositoryImpl {
    async fn create(&self, item: AuditLogModel) -> Result<AuditLogModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use labtrack_api::{AuditAction, AuditEntity, CallerContext, Role};
    use labtrack_db::{AuditLogModel, Create, UnitOfWorkSession};

    fn new_test_audit_log(user_id: i64, entity_id: i64) -> AuditLogModel {
        AuditLogModel::new(
            &CallerContext::new(user_id, Role::Engineer),
            AuditAction::Create,
            AuditEntity::Asset,
            entity_id,
        )
    }

    #[tokio::test]
    #[ignore]
    async fn test_create_audit_log() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_log_repo = ctx.session().audit_logs();

        let created = audit_log_repo.create(new_test_audit_log(42, 7)).await?;

        assert!(created.id > 0);
        assert_eq!(created.user_id, 42);
        assert_eq!(created.action, AuditAction::Create);
        assert_eq!(created.entity, AuditEntity::Asset);
        assert_eq!(created.entity_id, 7);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_audit_log_is_append_only() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let created = ctx.session().audit_logs().create(new_test_audit_log(1, 1)).await?;

        let mut tx = ctx.session().executor().tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = sqlx::query("UPDATE audit_log SET user_id = 2 WHERE id = $1")
            .bind(created.id)
            .execute(&mut **transaction)
            .await;
        assert!(result.is_err());

        Ok(())
    }
}
