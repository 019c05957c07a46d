//! Conversation and message models.

use casebridge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A conversation: a participant set plus an append-only message log.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Conversation {
    pub id: DbId,
    pub created_at: Timestamp,
}

/// A message joined with the sender's email for API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MessageView {
    pub id: DbId,
    #[serde(rename = "sender")]
    pub sender_id: DbId,
    pub sender_email: String,
    #[serde(rename = "text")]
    pub body: String,
    #[serde(rename = "timestamp")]
    pub sent_at: Timestamp,
}
