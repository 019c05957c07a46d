//! Lawyer profile model and DTOs.

use casebridge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full lawyer profile row. Exactly one per lawyer user.
///
/// `rating` is derived from `lawyer_ratings` and recomputed on every rating
/// upsert; it must never be written directly by profile updates.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LawyerProfile {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub full_name: String,
    pub bar_registration_number: String,
    pub specialization: String,
    pub experience_years: String,
    pub location: String,
    pub bio: String,
    pub is_verified: bool,
    pub rating: f64,
    pub cases_won: i32,
    pub clients_served: i32,
    pub created_at: Timestamp,
}

/// DTO for inserting a new lawyer profile.
#[derive(Debug)]
pub struct CreateLawyerProfile {
    pub user_id: DbId,
    pub full_name: String,
    pub bar_registration_number: String,
    pub specialization: String,
    pub experience_years: String,
    pub location: String,
    pub bio: String,
}

/// DTO for a partial profile update. `is_verified` and `rating` are not
/// client-writable and are intentionally absent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLawyerProfile {
    pub full_name: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}
