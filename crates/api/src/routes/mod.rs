pub mod appointments;
pub mod cases;
pub mod chat;
pub mod health;
pub mod hire;
pub mod lawyers;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/signup                                    signup (public)
/// /users/login                                     login (public)
/// /users/refresh                                   refresh (public)
/// /users/logout                                    logout (requires auth)
/// /users/profile                                   current user + profile
///
/// /lawyers/list                                    directory (bot excluded)
/// /lawyers/detail/{user_id}                        one lawyer
/// /lawyers/update-profile                          own-profile update
/// /lawyers/documents                               verification documents
/// /lawyers/rate                                    rate a lawyer
/// /lawyers/check-lawyer-rating                     caller's rating
/// /lawyers/clients/{lawyer_id}                     client roster
///
/// /lawyers/cases                                   list, create
/// /lawyers/cases/client                            client's cases
/// /lawyers/cases/{id}                              patch
/// /lawyers/cases/{id}/upload-document              attach document
///
/// /hire/lawyer/{lawyer_id}                         create hire request
/// /hire/{id}/respond                               accept / reject
/// /hire/client/hire-requests                       client's hires
///
/// /appointments/schedule-appointment               schedule
/// /appointments                                    lawyer listing
/// /appointments/client                             client listing
/// /appointments/{id}/status                        patch status
/// /appointments/{id}/delete                        delete
///
/// /chat/start                                      open conversation
/// /chat/bot/init                                   bot conversation
/// /chat/conversations/{id}/messages                list (?since)
/// /chat/conversations/{id}/send                    send
/// /chat/conversations/{id}/legal-bot               assistant turn
/// /chat/contacts                                   contacts
///
/// /transactions/create                             open order + record
/// /transactions/verify-payment                     complete via signature
/// /transactions                                    lawyer listing
/// /transactions/stats                              lawyer aggregates
/// /transactions/{id}/update                        manual status
/// /transactions/{id}/delete                        delete pending
/// /transactions/clients/payment-requests           client listing
/// /transactions/clients/payment-requests/stats     client aggregates
/// /transactions/clients/payments/{id}/pay          checkout fields
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/lawyers", lawyers::router())
        .nest("/lawyers/cases", cases::router())
        .nest("/hire", hire::router())
        .nest("/appointments", appointments::router())
        .nest("/chat", chat::router())
        .nest("/transactions", transactions::router())
}
