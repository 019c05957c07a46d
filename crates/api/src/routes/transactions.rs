//! Route definitions for payment transactions (`/transactions`).

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// POST   /create                                  -> open order + record (lawyer)
/// POST   /verify-payment                          -> signature check + complete
/// GET    /                                        -> lawyer listing (?status=&search=)
/// GET    /stats                                   -> lawyer aggregates
/// PATCH  /{id}/update                             -> manual failed/refunded (lawyer)
/// DELETE /{id}/delete                             -> delete pending (lawyer)
/// GET    /clients/payment-requests                -> client listing (?status=)
/// GET    /clients/payment-requests/stats          -> client aggregates
/// POST   /clients/payments/{id}/pay               -> checkout fields (client)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(transactions::create))
        .route("/verify-payment", post(transactions::verify_payment))
        .route("/", get(transactions::list_for_lawyer))
        .route("/stats", get(transactions::stats_for_lawyer))
        .route("/{id}/update", patch(transactions::update_status))
        .route("/{id}/delete", delete(transactions::delete))
        .route(
            "/clients/payment-requests",
            get(transactions::client_payment_requests),
        )
        .route(
            "/clients/payment-requests/stats",
            get(transactions::client_stats),
        )
        .route("/clients/payments/{id}/pay", post(transactions::pay))
}
