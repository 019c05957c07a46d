//! Repository for the append-only `messages` log.

use casebridge_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::conversation::MessageView;

const VIEW_COLUMNS: &str =
    "m.id, m.sender_id, u.email AS sender_email, m.body, m.sent_at";

/// Provides append and read operations on messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Append a message stamped with server time, returning the stored view.
    pub async fn create(
        pool: &PgPool,
        conversation_id: DbId,
        sender_id: DbId,
        body: &str,
    ) -> Result<MessageView, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                 INSERT INTO messages (conversation_id, sender_id, body)
                 VALUES ($1, $2, $3)
                 RETURNING id, sender_id, body, sent_at
             )
             SELECT {columns}
             FROM inserted m
             JOIN users u ON u.id = m.sender_id",
            columns = VIEW_COLUMNS
        );
        sqlx::query_as::<_, MessageView>(&query)
            .bind(conversation_id)
            .bind(sender_id)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// List a conversation's messages in ascending timestamp order.
    ///
    /// With `since`, only messages strictly after the cursor are returned.
    /// The log is append-only, so timestamp order coincides with insertion
    /// order; the id is a tiebreaker for equal timestamps.
    pub async fn list(
        pool: &PgPool,
        conversation_id: DbId,
        since: Option<Timestamp>,
    ) -> Result<Vec<MessageView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM messages m
             JOIN users u ON u.id = m.sender_id
             WHERE m.conversation_id = $1
               AND ($2::timestamptz IS NULL OR m.sent_at > $2)
             ORDER BY m.sent_at ASC, m.id ASC"
        );
        sqlx::query_as::<_, MessageView>(&query)
            .bind(conversation_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
