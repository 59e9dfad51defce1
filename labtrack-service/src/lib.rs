//! Ticket lifecycle workflow and audit recording.
//!
//! Both services are generic over a [`UnitOfWork`](labtrack_db::UnitOfWork), so
//! the same code runs against PostgreSQL and the in-process store.

pub mod audit_recorder;
pub mod ticket_workflow;

mod session_ext;

pub use audit_recorder::AuditRecorder;
pub use ticket_workflow::TicketWorkflowEngine;
