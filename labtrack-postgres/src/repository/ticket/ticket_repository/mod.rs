pub mod repo_impl;
pub mod create;
pub mod load;
pub mod load_for_update;
pub mod update;
pub mod find_by_status;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::TicketRepositoryImpl;
