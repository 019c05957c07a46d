//! Payment transaction model.

use casebridge_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction lifecycle status, mapping to the `transaction_status` enum.
///
/// `pending -> completed` happens only through gateway signature
/// verification; `pending -> failed` / `pending -> refunded` through the
/// owning lawyer's manual status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Refunded,
    Failed,
}

/// Full transaction row: a payment request from a lawyer to a client,
/// backed by an external gateway order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transaction {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub description: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    #[serde(skip)]
    pub gateway_signature: Option<String>,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A transaction joined with counterpart display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionView {
    pub id: DbId,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub description: String,
    pub created_at: Timestamp,
    pub paid_at: Option<Timestamp>,
    pub gateway_order_id: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub lawyer_name: String,
    pub lawyer_specialization: String,
}

/// DTO for creating a new payment request.
#[derive(Debug)]
pub struct CreateTransaction {
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub amount: Decimal,
    pub description: String,
    pub gateway_order_id: String,
}

/// Per-party aggregate counters for the stats endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionStats {
    pub total_transactions: i64,
    pub completed_count: i64,
    pub pending_count: i64,
    pub failed_count: i64,
    pub refunded_count: i64,
    pub completed_amount: Decimal,
    pub pending_amount: Decimal,
}
