//! Repository for conversations and participant membership.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::conversation::Conversation;

/// Provides operations on conversations and their participant sets.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Find the existing 2-party conversation between two users, if any.
    ///
    /// Only conversations with exactly two participants qualify, so a future
    /// group conversation containing both users would not be returned.
    pub async fn find_two_party(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c.id FROM conversations c
             WHERE EXISTS (SELECT 1 FROM conversation_participants
                            WHERE conversation_id = c.id AND user_id = $1)
               AND EXISTS (SELECT 1 FROM conversation_participants
                            WHERE conversation_id = c.id AND user_id = $2)
               AND (SELECT COUNT(*) FROM conversation_participants
                     WHERE conversation_id = c.id) = 2
             LIMIT 1",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(pool)
        .await
    }

    /// Create a new conversation with the two given participants.
    ///
    /// Conversation row and both membership rows are written in one database
    /// transaction so a half-created conversation can never be observed.
    pub async fn create_two_party(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
    ) -> Result<Conversation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let conversation = sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations DEFAULT VALUES RETURNING id, created_at",
        )
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO conversation_participants (conversation_id, user_id)
             VALUES ($1, $2), ($1, $3)",
        )
        .bind(conversation.id)
        .bind(user_a)
        .bind(user_b)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(conversation)
    }

    /// Whether a conversation with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM conversations WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether a user is a participant of a conversation.
    pub async fn is_participant(
        pool: &PgPool,
        conversation_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                 SELECT 1 FROM conversation_participants
                 WHERE conversation_id = $1 AND user_id = $2
             )",
        )
        .bind(conversation_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
