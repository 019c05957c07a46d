//! Route definitions for the `/appointments` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// POST   /schedule-appointment   -> schedule (lawyer)
/// GET    /                       -> lawyer's appointments
/// GET    /client                 -> client's appointments
/// PATCH  /{id}/status            -> update status (owning lawyer)
/// DELETE /{id}/delete            -> delete (owning lawyer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedule-appointment", post(appointments::schedule))
        .route("/", get(appointments::list_for_lawyer))
        .route("/client", get(appointments::list_for_client))
        .route("/{id}/status", patch(appointments::update_status))
        .route("/{id}/delete", delete(appointments::delete))
}
