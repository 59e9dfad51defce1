use sqlx::PgPool;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::repository::db_init::init_database;
use crate::unit_of_work::PostgresUnitOfWork;

/// Entry point to the PostgreSQL store.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects with `config`, running migrations first when `auto_migrate` is set.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let pool = config.connect().await?;
        if config.auto_migrate {
            init_database(&pool).await?;
        }
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Unit of work whose sessions each run in their own transaction.
    pub fn unit_of_work(&self) -> PostgresUnitOfWork {
        PostgresUnitOfWork::new(self.pool.clone())
    }
}
