use thiserror::Error;

use crate::domain::TicketStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not found: ticket {0}")]
    NotFound(i64),

    #[error("Invalid transition: {from} -> {to} is not permitted for role {role}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
        role: String,
    },

    #[error("Unknown status: {0:?}")]
    UnknownStatus(String),

    #[error("Audit write failure: {0}")]
    AuditWriteFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::InvalidTransition { .. } => 409,
            ApiError::UnknownStatus(_) => 400,
            ApiError::AuditWriteFailure(_) | ApiError::DatabaseError(_) => 500,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_distinguish_not_found_from_rejection() {
        assert_eq!(ApiError::NotFound(999).status_code(), 404);
        let rejected = ApiError::InvalidTransition {
            from: TicketStatus::Closed,
            to: TicketStatus::Open,
            role: "Technician".to_string(),
        };
        assert_eq!(rejected.status_code(), 409);
        assert_eq!(ApiError::UnknownStatus("Done".into()).status_code(), 400);
        assert_eq!(ApiError::AuditWriteFailure("down".into()).status_code(), 500);
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = ApiError::InvalidTransition {
            from: TicketStatus::Closed,
            to: TicketStatus::Open,
            role: "Technician".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition: Closed -> Open is not permitted for role Technician"
        );
    }
}
