//! Legal case and case document models.

use casebridge_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Case lifecycle status, mapping to the `case_status` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "case_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Active,
    Closed,
    Pending,
    OnHold,
}

/// Case priority, mapping to the `case_priority` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "case_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CasePriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Full legal case row. Owned exclusively by the lawyer who created it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LegalCase {
    pub id: DbId,
    pub title: String,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub court: String,
    pub case_number: String,
    pub next_hearing: NaiveDate,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub last_update: Timestamp,
    pub created_at: Timestamp,
}

/// A case joined with the client's display name, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CaseWithClient {
    pub id: DbId,
    pub title: String,
    pub client_id: DbId,
    pub client_name: String,
    pub court: String,
    pub case_number: String,
    pub next_hearing: NaiveDate,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub last_update: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new case.
#[derive(Debug)]
pub struct CreateLegalCase {
    pub title: String,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub court: String,
    pub case_number: String,
    pub next_hearing: NaiveDate,
    pub status: Option<CaseStatus>,
    pub priority: Option<CasePriority>,
}

/// DTO for an incremental case patch. All fields optional; an empty patch is
/// rejected at the handler layer.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLegalCase {
    pub status: Option<CaseStatus>,
    pub priority: Option<CasePriority>,
    pub next_hearing: Option<NaiveDate>,
}

/// A document attached to a case.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CaseDocument {
    pub id: DbId,
    pub legal_case_id: DbId,
    pub title: String,
    pub file_path: String,
    pub uploaded_at: Timestamp,
}
