pub mod audit;
pub mod caller;
pub mod role;
pub mod ticket;

pub use audit::{AuditAction, AuditEntity, AuditEntry};
pub use caller::CallerContext;
pub use role::Role;
pub use ticket::{CreateTicketRequest, Ticket, TicketStatus, TransitionRequest};
