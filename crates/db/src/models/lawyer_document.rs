//! Lawyer verification document set model.

use casebridge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Verification document set for a lawyer. At most one per lawyer profile;
/// immutable once `uploaded` is true.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LawyerDocuments {
    #[serde(skip)]
    pub id: DbId,
    #[serde(skip)]
    pub lawyer_id: DbId,
    pub uploaded: bool,
    pub photo_id_path: Option<String>,
    pub cop_path: Option<String>,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// DTO for the one-time document upload.
#[derive(Debug)]
pub struct CreateLawyerDocuments {
    pub lawyer_id: DbId,
    pub photo_id_path: Option<String>,
    pub cop_path: Option<String>,
}
