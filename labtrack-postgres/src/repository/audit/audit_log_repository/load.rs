use async_trait::async_trait;
use labtrack_db::{AuditLogModel, Load};
use std::error::Error;

use super::repo_impl::{AuditLogRepositoryImpl, AUDIT_LOG_COLUMNS};

#[async_trait]
impl Load<AuditLogModel> for AuditLogRepositoryImpl {
    async fn load(&self, id: i64) -> Result<Option<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {AUDIT_LOG_COLUMNS} FROM audit_log WHERE id = $1");

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let found = sqlx::query_as::<_, AuditLogModel>(&query)
            .bind(id)
            .fetch_optional(&mut **transaction)
            .await?;

        Ok(found)
    }
}
