pub mod repo_impl;
pub mod create;
pub mod load;
pub mod find_by_entity;

pub use repo_impl::AuditLogRepositoryImpl;
