use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller classification handed in by the authentication layer.
///
/// The role is trusted as given; nothing in the workflow re-validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Engineer,
    #[default]
    Technician,
    /// Issued by the login exchange when credentials do not match.
    Guest,
    Other(String),
}

impl Role {
    /// Maps a role claim to a [`Role`].
    ///
    /// A missing or blank claim becomes `Technician`, the most restrictive
    /// role for the one role-discriminated transition.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(str::trim) {
            None | Some("") => Role::Technician,
            Some("Admin") => Role::Admin,
            Some("Engineer") => Role::Engineer,
            Some("Technician") => Role::Technician,
            Some("Guest") => Role::Guest,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Engineer => "Engineer",
            Role::Technician => "Technician",
            Role::Guest => "Guest",
            Role::Other(name) => name,
        }
    }

    pub fn is_technician(&self) -> bool {
        matches!(self, Role::Technician)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
