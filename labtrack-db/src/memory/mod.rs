//! In-process implementation of the unit-of-work traits.
//!
//! Writes are staged per session and applied on commit. Ticket rows are
//! locked per id with an async mutex whose guard lives in the session.

pub mod audit_log_repository;
pub mod session;
pub mod store;
pub mod ticket_repository;

pub use audit_log_repository::MemoryAuditLogRepository;
pub use session::MemorySession;
pub use store::MemoryStore;
pub use ticket_repository::MemoryTicketRepository;
