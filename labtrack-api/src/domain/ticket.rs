use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Lifecycle status of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_status", rename_all = "PascalCase"))]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "InProgress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Open" => Ok(TicketStatus::Open),
            "InProgress" => Ok(TicketStatus::InProgress),
            "Resolved" => Ok(TicketStatus::Resolved),
            "Closed" => Ok(TicketStatus::Closed),
            _ => Err(ApiError::UnknownStatus(s.to_string())),
        }
    }
}

/// A maintenance ticket raised against an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub status: TicketStatus,
    /// Opaque reference to the asset; never dereferenced here.
    pub asset_id: i64,
}

/// Body of the create-ticket request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub title: String,
    pub asset_id: i64,
}

/// Body of the status-change request. The status stays a raw string so an
/// unrecognised value can be reported as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub ticket_id: i64,
    pub requested_status: String,
}

impl TransitionRequest {
    pub fn new(ticket_id: i64, requested_status: impl Into<String>) -> Self {
        Self {
            ticket_id,
            requested_status: requested_status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        }
        assert_eq!(" Closed ".parse::<TicketStatus>(), Ok(TicketStatus::Closed));
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(
            "Done".parse::<TicketStatus>(),
            Err(ApiError::UnknownStatus("Done".to_string()))
        );
        // Matching is case-sensitive.
        assert!("open".parse::<TicketStatus>().is_err());
        assert!("".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_ticket_wire_shape() {
        let ticket = Ticket {
            id: 1,
            title: "Lens not working".to_string(),
            status: TicketStatus::Open,
            asset_id: 1,
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Lens not working",
                "status": "Open",
                "assetId": 1
            })
        );
    }

    #[test]
    fn test_transition_request_from_json() {
        let request: TransitionRequest =
            serde_json::from_str(r#"{"ticketId": 7, "requestedStatus": "InProgress"}"#).unwrap();
        assert_eq!(request, TransitionRequest::new(7, "InProgress"));
    }
}
