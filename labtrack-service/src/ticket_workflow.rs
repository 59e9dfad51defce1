use async_trait::async_trait;
use labtrack_api::{
    evaluate_transition, ApiError, ApiResult, AuditAction, CallerContext, CreateTicketRequest,
    Ticket, TicketService, TicketStatus, TransitionRequest,
};
use labtrack_db::{
    Auditable, Create, FindByStatus, Load, LoadForUpdate, TicketModel, UnitOfWork,
    UnitOfWorkSession, Update,
};
use tracing::{info, warn};

use crate::audit_recorder::record_in;
use crate::session_ext::{abort, database_error};

/// Owns ticket state and enforces the status state machine.
///
/// Every accepted mutation and its audit entry are written in one unit of
/// work: either both are committed or neither is.
pub struct TicketWorkflowEngine<U> {
    uow: U,
}

impl<U: UnitOfWork> TicketWorkflowEngine<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }
}

async fn create_in<S: UnitOfWorkSession>(
    session: &S,
    caller: &CallerContext,
    request: CreateTicketRequest,
) -> ApiResult<Ticket> {
    let ticket = session
        .tickets()
        .create(TicketModel::new_open(request.title, request.asset_id))
        .await
        .map_err(database_error)?;
    record_in(session, caller, AuditAction::Create, TicketModel::AUDIT_ENTITY, ticket.id).await?;
    Ok(ticket.into())
}

async fn transition_in<S: UnitOfWorkSession>(
    session: &S,
    caller: &CallerContext,
    ticket_id: i64,
    requested: TicketStatus,
) -> ApiResult<Ticket> {
    // Held until the session ends, so racing requests on this ticket serialise here.
    let mut ticket = session
        .tickets()
        .load_for_update(ticket_id)
        .await
        .map_err(database_error)?
        .ok_or(ApiError::NotFound(ticket_id))?;

    let from = ticket.status;
    if !evaluate_transition(from, requested, &caller.role).is_allowed() {
        warn!(%from, to = %requested, role = %caller.role, "transition rejected");
        return Err(ApiError::InvalidTransition {
            from,
            to: requested,
            role: caller.role.to_string(),
        });
    }

    ticket.status = requested;
    let updated = session.tickets().update(ticket).await.map_err(database_error)?;
    record_in(
        session,
        caller,
        AuditAction::StatusChange,
        TicketModel::AUDIT_ENTITY,
        updated.id,
    )
    .await?;
    Ok(updated.into())
}

#[async_trait]
impl<U: UnitOfWork> TicketService for TicketWorkflowEngine<U> {
    #[tracing::instrument(skip(self, caller, request), fields(user_id = caller.user_id, asset_id = request.asset_id))]
    async fn create_ticket(
        &self,
        caller: &CallerContext,
        request: CreateTicketRequest,
    ) -> ApiResult<Ticket> {
        let session = self.uow.begin().await.map_err(database_error)?;
        match create_in(&session, caller, request).await {
            Ok(ticket) => {
                session.commit().await.map_err(database_error)?;
                info!(ticket_id = ticket.id, "ticket created");
                Ok(ticket)
            }
            Err(err) => Err(abort(session, err).await),
        }
    }

    #[tracing::instrument(skip(self, caller, request), fields(user_id = caller.user_id, ticket_id = request.ticket_id))]
    async fn request_transition(
        &self,
        caller: &CallerContext,
        request: TransitionRequest,
    ) -> ApiResult<Ticket> {
        let requested: TicketStatus = request.requested_status.parse()?;

        let session = self.uow.begin().await.map_err(database_error)?;
        match transition_in(&session, caller, request.ticket_id, requested).await {
            Ok(ticket) => {
                session.commit().await.map_err(database_error)?;
                info!(status = %ticket.status, "ticket status changed");
                Ok(ticket)
            }
            Err(err) => Err(abort(session, err).await),
        }
    }

    async fn find_ticket(&self, id: i64) -> ApiResult<Ticket> {
        let session = self.uow.begin().await.map_err(database_error)?;
        let loaded = session.tickets().load(id).await;
        session.rollback().await.map_err(database_error)?;
        loaded
            .map_err(database_error)?
            .map(Ticket::from)
            .ok_or(ApiError::NotFound(id))
    }

    async fn list_tickets(&self, status: Option<TicketStatus>) -> ApiResult<Vec<Ticket>> {
        let session = self.uow.begin().await.map_err(database_error)?;
        let found = session.tickets().find_by_status(status).await;
        session.rollback().await.map_err(database_error)?;
        Ok(found
            .map_err(database_error)?
            .into_iter()
            .map(Ticket::from)
            .collect())
    }
}
