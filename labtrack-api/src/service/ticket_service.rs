use async_trait::async_trait;

use crate::domain::{CallerContext, CreateTicketRequest, Ticket, TicketStatus, TransitionRequest};
use crate::error::ApiResult;

/// Ticket operations offered to the HTTP layer.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Creates a ticket in `Open` status and records a `CREATE` audit entry.
    async fn create_ticket(
        &self,
        caller: &CallerContext,
        request: CreateTicketRequest,
    ) -> ApiResult<Ticket>;

    /// Applies a status change if the transition rule allows it for the caller's role.
    ///
    /// # Returns
    /// * `Ok(Ticket)` - The updated ticket; one `STATUS_CHANGE` entry was recorded
    /// * `Err(ApiError::UnknownStatus)` - The requested status is not recognised
    /// * `Err(ApiError::NotFound)` - No ticket has the given id
    /// * `Err(ApiError::InvalidTransition)` - The rule rejected the move; nothing changed
    /// * `Err(ApiError::AuditWriteFailure)` - The audit append failed; the change was rolled back
    async fn request_transition(
        &self,
        caller: &CallerContext,
        request: TransitionRequest,
    ) -> ApiResult<Ticket>;

    async fn find_ticket(&self, id: i64) -> ApiResult<Ticket>;

    /// Lists tickets ordered by id, optionally restricted to one status.
    async fn list_tickets(&self, status: Option<TicketStatus>) -> ApiResult<Vec<Ticket>>;
}
