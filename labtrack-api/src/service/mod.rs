pub mod audit_service;
pub mod ticket_service;

pub use audit_service::AuditService;
pub use ticket_service::TicketService;
