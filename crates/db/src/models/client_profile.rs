//! Client ("general user") profile model.

use casebridge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full client profile row. Exactly one per client user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientProfile {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new client profile.
#[derive(Debug)]
pub struct CreateClientProfile {
    pub user_id: DbId,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
}
