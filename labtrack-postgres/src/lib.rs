pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use config::DatabaseConfig;
pub use postgres_repositories::PostgresRepositories;
pub use repository::audit::AuditLogRepositoryImpl;
pub use repository::ticket::TicketRepositoryImpl;
pub use unit_of_work::{Executor, PostgresSession, PostgresUnitOfWork};

#[cfg(test)]
pub mod test_helper;
