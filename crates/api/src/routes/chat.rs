//! Route definitions for hire-gated messaging (`/chat`).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// POST /start                          -> open/return a two-party conversation
/// POST /bot/init                       -> bootstrap caller <-> bot conversation
/// GET  /conversations/{id}/messages    -> messages (?since=<rfc3339>)
/// POST /conversations/{id}/send        -> send a message
/// POST /conversations/{id}/legal-bot   -> assistant turn (message + reply)
/// GET  /contacts                       -> accepted-hire counterparts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(chat::start))
        .route("/bot/init", post(chat::bot_init))
        .route("/conversations/{id}/messages", get(chat::messages))
        .route("/conversations/{id}/send", post(chat::send))
        .route("/conversations/{id}/legal-bot", post(chat::legal_bot))
        .route("/contacts", get(chat::contacts))
}
