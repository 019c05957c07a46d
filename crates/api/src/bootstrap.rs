//! Startup provisioning.

use casebridge_core::types::DbId;
use casebridge_db::models::user::{CreateUser, UserRole};
use casebridge_db::repositories::UserRepo;
use casebridge_db::DbPool;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Ensure the reserved legal-assistant bot account exists, returning its id.
///
/// The bot is a `system`-role user keyed by the configured email. Its
/// password is a random throwaway; nothing ever logs in as the bot, it only
/// appears as a message sender and conversation participant.
pub async fn ensure_bot_user(pool: &DbPool, bot_email: &str) -> AppResult<DbId> {
    if let Some(existing) = UserRepo::find_by_email(pool, bot_email).await? {
        return Ok(existing.id);
    }

    let password_hash = hash_password(&Uuid::new_v4().to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: bot_email.to_string(),
            password_hash,
            role: UserRole::System,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Provisioned bot account");
    Ok(user.id)
}
