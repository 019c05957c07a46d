//! Hire relationship model.

use casebridge_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hire lifecycle status, mapping to the `hire_status` PostgreSQL enum.
///
/// Clients create hires as `pending`; the referenced lawyer may transition
/// `pending` to `accepted` or `rejected`. The `completed` and `cancelled`
/// states exist in the lifecycle but no exposed operation reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "hire_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HireStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl HireStatus {
    /// Whether this status is a valid lawyer response to a pending hire.
    pub fn is_valid_response(self) -> bool {
        matches!(self, HireStatus::Accepted | HireStatus::Rejected)
    }
}

/// Full hire row linking one client profile to one lawyer profile.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Hire {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub status: HireStatus,
    pub deposit_amount: Decimal,
    pub is_paid: bool,
    pub hired_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hire joined with counterpart display fields, for client-facing listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HireWithLawyer {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub status: HireStatus,
    pub deposit_amount: Decimal,
    pub is_paid: bool,
    pub hired_at: Timestamp,
    pub lawyer_name: String,
    pub lawyer_specialization: String,
}

/// An accepted-hire counterpart entry for the derived chat contact list.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HireContact {
    pub user_id: DbId,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// A client entry in a lawyer's client roster, with per-client case counts.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LawyerClientEntry {
    pub client_id: DbId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub hire_id: DbId,
    pub hire_status: HireStatus,
    pub total_cases: i64,
    pub active_cases: i64,
}
