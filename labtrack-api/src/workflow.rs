//! Ticket status state machine.
//!
//! ```text
//! Open -> InProgress -> Resolved -> Closed
//!   ^                                 |
//!   +-------- (not Technician) -------+
//! ```

use crate::domain::{Role, TicketStatus};

/// Outcome of evaluating a requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDecision {
    Allowed,
    Rejected,
}

impl TransitionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, TransitionDecision::Allowed)
    }
}

/// Decides whether a ticket may move from `from` to `to` for a caller with `role`.
///
/// Only reopening a closed ticket depends on the role. Every pair not listed,
/// including a move to the current status, is rejected.
pub fn evaluate_transition(from: TicketStatus, to: TicketStatus, role: &Role) -> TransitionDecision {
    use TicketStatus::*;

    let allowed = match (from, to) {
        (Open, InProgress) | (InProgress, Resolved) | (Resolved, Closed) => true,
        (Closed, Open) => !role.is_technician(),
        _ => false,
    };

    if allowed {
        TransitionDecision::Allowed
    } else {
        TransitionDecision::Rejected
    }
}

impl TicketStatus {
    /// Statuses reachable from this one for a caller with `role`.
    pub fn allowed_targets(&self, role: &Role) -> Vec<TicketStatus> {
        TicketStatus::ALL
            .into_iter()
            .filter(|to| evaluate_transition(*self, *to, role).is_allowed())
            .collect()
    }
}
