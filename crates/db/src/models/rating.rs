//! Lawyer rating model.

use casebridge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single client-to-lawyer rating. One row per (client, lawyer) pair,
/// maintained with upsert semantics.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LawyerRating {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub rating: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
