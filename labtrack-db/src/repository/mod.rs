pub mod create;
pub mod find_by_entity;
pub mod find_by_status;
pub mod load;
pub mod load_for_update;
pub mod unit_of_work;
pub mod update;

pub use create::*;
pub use find_by_entity::*;
pub use find_by_status::*;
pub use load::*;
pub use load_for_update::*;
pub use unit_of_work::*;
pub use update::*;

/// Error type shared by all repository operations.
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;
pub type RepositoryResult<T> = Result<T, RepositoryError>;
