//! Handlers for hire-gated messaging (`/chat`).
//!
//! A conversation may be opened between a client and a lawyer only while an
//! accepted hire links them. The reserved bot account bypasses the hire gate:
//! any user can open a conversation with it and drive the legal assistant
//! through the `legal-bot` endpoint.

use axum::extract::{Path, Query, State};
use casebridge_core::error::CoreError;
use casebridge_core::roles::{ROLE_CLIENT, ROLE_LAWYER};
use casebridge_core::types::{DbId, Timestamp};
use casebridge_db::models::conversation::MessageView;
use casebridge_db::models::hire::HireContact;
use casebridge_db::models::user::UserRole;
use casebridge_db::repositories::{
    ClientProfileRepo, ConversationRepo, HireRepo, LawyerProfileRepo, MessageRepo, UserRepo,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /chat/start`.
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub participant_id: DbId,
}

/// Query parameters for the message listing.
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    /// Return only messages strictly after this instant.
    pub since: Option<Timestamp>,
}

/// Request body for sending a message.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Conversation bootstrap
// ---------------------------------------------------------------------------

/// POST /api/v1/chat/start
///
/// Open (or return) the two-party conversation between the caller and a
/// counterpart. Allowed iff the counterpart is the bot, or the pair is one
/// client + one lawyer linked by an accepted hire.
pub async fn start(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<StartRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if input.participant_id == auth_user.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot start a conversation with yourself".into(),
        )));
    }

    if input.participant_id != state.bot_user_id {
        let counterpart = UserRepo::find_by_id(&state.pool, input.participant_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: input.participant_id,
            }))?;

        if !accepted_hire_links(&state, &auth_user, counterpart.id, counterpart.role).await? {
            return Err(AppError::Core(CoreError::Forbidden(
                "Messaging requires an accepted hire between the participants".into(),
            )));
        }
    }

    open_two_party(&state, auth_user.user_id, input.participant_id).await
}

/// POST /api/v1/chat/bot/init
///
/// Idempotent bootstrap of the caller's conversation with the bot.
pub async fn bot_init(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    open_two_party(&state, auth_user.user_id, state.bot_user_id).await
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// GET /api/v1/chat/conversations/{id}/messages?since=<rfc3339>
///
/// Messages in ascending send order; with `since`, only those strictly after.
pub async fn messages(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Query(query): Query<MessagesQuery>,
) -> AppResult<Json<DataResponse<Vec<MessageView>>>> {
    require_participant(&state, id, auth_user.user_id).await?;

    let messages = MessageRepo::list(&state.pool, id, query.since).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/chat/conversations/{id}/send
pub async fn send(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SendRequest>,
) -> AppResult<Json<DataResponse<MessageView>>> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message text must not be empty".into(),
        )));
    }

    require_participant(&state, id, auth_user.user_id).await?;

    let message = MessageRepo::create(&state.pool, id, auth_user.user_id, text).await?;
    Ok(Json(DataResponse { data: message }))
}

/// POST /api/v1/chat/conversations/{id}/legal-bot
///
/// Persist the caller's message, ask the assistant collaborator with the raw
/// text (no history), persist its answer as the bot's reply, return both.
/// A collaborator failure surfaces as-is; nothing is retried.
pub async fn legal_bot(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SendRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message text must not be empty".into(),
        )));
    }

    require_participant(&state, id, auth_user.user_id).await?;

    if !ConversationRepo::is_participant(&state.pool, id, state.bot_user_id).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "This conversation does not include the legal assistant".into(),
        )));
    }

    let message = MessageRepo::create(&state.pool, id, auth_user.user_id, text).await?;

    let answer = state.assistant.answer(text).await?;

    let reply = MessageRepo::create(&state.pool, id, state.bot_user_id, &answer).await?;

    Ok(Json(json!({
        "message": message,
        "reply": reply,
    })))
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// GET /api/v1/chat/contacts
///
/// Derived contact list: one entry per distinct counterpart with an accepted
/// hire.
pub async fn contacts(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<HireContact>>>> {
    let entries = match auth_user.role.as_str() {
        ROLE_CLIENT => {
            let profile = ClientProfileRepo::find_by_user_id(&state.pool, auth_user.user_id)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Forbidden("Client profile not found".into()))
                })?;
            HireRepo::contacts_for_client(&state.pool, profile.id).await?
        }
        ROLE_LAWYER => {
            let profile = LawyerProfileRepo::find_by_user_id(&state.pool, auth_user.user_id)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Forbidden("Lawyer profile not found".into()))
                })?;
            HireRepo::contacts_for_lawyer(&state.pool, profile.id).await?
        }
        _ => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Contacts are available to clients and lawyers".into(),
            )))
        }
    };

    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether an accepted hire links the caller with the counterpart user.
/// The pair must be exactly one client and one lawyer.
async fn accepted_hire_links(
    state: &AppState,
    caller: &AuthUser,
    counterpart_user_id: DbId,
    counterpart_role: UserRole,
) -> AppResult<bool> {
    let (client_user_id, lawyer_user_id) = match (caller.role.as_str(), counterpart_role) {
        (ROLE_CLIENT, UserRole::Lawyer) => (caller.user_id, counterpart_user_id),
        (ROLE_LAWYER, UserRole::Client) => (counterpart_user_id, caller.user_id),
        _ => return Ok(false),
    };

    let client = ClientProfileRepo::find_by_user_id(&state.pool, client_user_id).await?;
    let lawyer = LawyerProfileRepo::find_by_user_id(&state.pool, lawyer_user_id).await?;

    match (client, lawyer) {
        (Some(client), Some(lawyer)) => {
            Ok(HireRepo::accepted_exists(&state.pool, client.id, lawyer.id).await?)
        }
        _ => Ok(false),
    }
}

/// Return the existing two-party conversation for the pair or create one.
async fn open_two_party(
    state: &AppState,
    user_a: DbId,
    user_b: DbId,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(existing) = ConversationRepo::find_two_party(&state.pool, user_a, user_b).await? {
        return Ok(Json(json!({
            "conversation_id": existing,
            "created": false,
        })));
    }

    let conversation = ConversationRepo::create_two_party(&state.pool, user_a, user_b).await?;
    Ok(Json(json!({
        "conversation_id": conversation.id,
        "created": true,
    })))
}

/// 404 on a missing conversation, 403 on a non-participant caller.
async fn require_participant(state: &AppState, id: DbId, user_id: DbId) -> AppResult<()> {
    if !ConversationRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Conversation",
            id,
        }));
    }
    if !ConversationRepo::is_participant(&state.pool, id, user_id).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not a participant in this conversation".into(),
        )));
    }
    Ok(())
}
