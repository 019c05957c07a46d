//! Route definitions for legal cases (`/lawyers/cases`).

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Routes mounted at `/lawyers/cases`.
///
/// ```text
/// GET   /                        -> lawyer's cases with documents
/// POST  /                        -> create case (lawyer)
/// GET   /client                  -> client's cases with documents
/// PATCH /{id}                    -> patch status/priority/next_hearing
/// POST  /{id}/upload-document    -> attach a document (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list_for_lawyer).post(cases::create))
        .route("/client", get(cases::list_for_client))
        .route("/{id}", patch(cases::update))
        .route("/{id}/upload-document", post(cases::upload_document))
}
