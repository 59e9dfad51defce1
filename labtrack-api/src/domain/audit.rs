use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag describing the mutating operation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "audit_action", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AuditAction {
    Create,
    StatusChange,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::StatusChange => "STATUS_CHANGE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record an audit entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "audit_entity_type", rename_all = "PascalCase"))]
pub enum AuditEntity {
    Ticket,
    Asset,
    User,
    Comment,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEntity::Ticket => "Ticket",
            AuditEntity::Asset => "Asset",
            AuditEntity::User => "User",
            AuditEntity::Comment => "Comment",
        }
    }
}

impl fmt::Display for AuditEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuditEntity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ticket" => Ok(AuditEntity::Ticket),
            "Asset" => Ok(AuditEntity::Asset),
            "User" => Ok(AuditEntity::User),
            "Comment" => Ok(AuditEntity::Comment),
            _ => Err(format!("Unknown entity type: {s}")),
        }
    }
}

/// One immutable record of a mutating action against one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: i64,
    pub user_id: i64,
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: i64,
    pub created_at: DateTime<Utc>,
}
