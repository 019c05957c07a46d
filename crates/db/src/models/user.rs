//! User entity model and DTOs.

use casebridge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role, mapping to the `user_role` PostgreSQL enum.
///
/// Immutable after creation. The `system` role is reserved for the
/// provisioned legal-assistant bot account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Lawyer,
    System,
}

impl UserRole {
    /// The role name as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Client => casebridge_core::roles::ROLE_CLIENT,
            UserRole::Lawyer => casebridge_core::roles::ROLE_LAWYER,
            UserRole::System => casebridge_core::roles::ROLE_SYSTEM,
        }
    }

    /// Parse a role name; unknown names return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            casebridge_core::roles::ROLE_CLIENT => Some(UserRole::Client),
            casebridge_core::roles::ROLE_LAWYER => Some(UserRole::Lawyer),
            casebridge_core::roles::ROLE_SYSTEM => Some(UserRole::System),
            _ => None,
        }
    }
}

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
