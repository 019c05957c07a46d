//! Route definitions for the `/hire` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::hire;
use crate::state::AppState;

/// Routes mounted at `/hire`.
///
/// ```text
/// POST  /lawyer/{lawyer_id}      -> create hire request (client)
/// PATCH /{id}/respond            -> accept/reject (owning lawyer)
/// GET   /client/hire-requests    -> caller's hires, newest first (client)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lawyer/{lawyer_id}", post(hire::hire_lawyer))
        .route("/{id}/respond", patch(hire::respond))
        .route("/client/hire-requests", get(hire::client_hire_requests))
}
