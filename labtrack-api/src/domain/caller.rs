use serde::{Deserialize, Serialize};

use super::role::Role;

/// Identity of the authenticated caller, passed into every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub user_id: i64,
    pub role: Role,
}

impl CallerContext {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Builds a context from the raw claims of the authentication layer.
    pub fn from_claims(user_id: i64, role_claim: Option<&str>) -> Self {
        Self {
            user_id,
            role: Role::from_claim(role_claim),
        }
    }
}
