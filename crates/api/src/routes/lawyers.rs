//! Route definitions for the `/lawyers` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::lawyers;
use crate::state::AppState;

/// Routes mounted at `/lawyers`.
///
/// ```text
/// GET  /list                     -> directory (excludes the bot account)
/// GET  /detail/{user_id}         -> one lawyer
/// PUT  /update-profile           -> partial own-profile update (lawyer)
/// GET  /documents                -> verification document status (lawyer)
/// POST /documents                -> one-time document upload (lawyer)
/// POST /rate                     -> rate a lawyer (client)
/// GET  /check-lawyer-rating      -> caller's rating for a lawyer (client)
/// GET  /clients/{lawyer_id}      -> client roster with case counts (lawyer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(lawyers::list))
        .route("/detail/{user_id}", get(lawyers::detail))
        .route("/update-profile", put(lawyers::update_profile))
        .route(
            "/documents",
            get(lawyers::get_documents).post(lawyers::upload_documents),
        )
        .route("/rate", post(lawyers::rate))
        .route("/check-lawyer-rating", get(lawyers::check_rating))
        .route("/clients/{lawyer_id}", get(lawyers::clients))
}
