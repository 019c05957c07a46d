//! Handlers for payment transactions (`/transactions`).
//!
//! A transaction is a payment request from a lawyer to a client, backed by an
//! order at the external gateway. Completion happens exclusively through
//! signature verification; the lawyer can only move a pending transaction to
//! `failed` or `refunded` manually.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use casebridge_core::error::CoreError;
use casebridge_core::types::DbId;
use casebridge_db::models::transaction::{
    CreateTransaction, Transaction, TransactionStats, TransactionStatus, TransactionView,
};
use casebridge_db::repositories::{ClientProfileRepo, TransactionRepo};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::middleware::identity::{ClientIdentity, LawyerIdentity};
use crate::state::AppState;

/// Currency for all gateway orders.
const CURRENCY: &str = "INR";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /transactions/create`.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub client_id: DbId,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Request body for `POST /transactions/verify-payment`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub transaction_id: DbId,
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
    pub gateway_signature: String,
}

/// Request body for `PATCH /transactions/{id}/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TransactionStatus,
}

/// List filter shared by the lawyer and client listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<TransactionStatus>,
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Lawyer side
// ---------------------------------------------------------------------------

/// POST /api/v1/transactions/create
///
/// Open a gateway order for the amount (in minor units) and record the
/// pending transaction. Returns the checkout fields the client needs.
pub async fn create(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Json(input): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if input.amount <= Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "Amount must be positive".into(),
        )));
    }

    ClientProfileRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client profile",
            id: input.client_id,
        }))?;

    let amount_minor = to_minor_units(input.amount)?;
    let receipt = format!("txn_{}", Uuid::new_v4());
    let order = state
        .gateway
        .create_order(amount_minor, CURRENCY, &receipt)
        .await?;

    let transaction = TransactionRepo::create(
        &state.pool,
        &CreateTransaction {
            client_id: input.client_id,
            lawyer_id: lawyer.profile.id,
            amount: input.amount,
            description: input.description.unwrap_or_default(),
            gateway_order_id: order.order_id.clone(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "data": transaction,
            "checkout": {
                "order_id": order.order_id,
                "amount": order.amount_minor,
                "currency": order.currency,
                "key_id": state.gateway.key_id(),
            },
        })),
    ))
}

/// POST /api/v1/transactions/verify-payment
///
/// Verify a checkout signature and complete the transaction in one guarded
/// update. A transaction that is no longer pending conflicts with no
/// mutation; an invalid signature rejects with no mutation.
pub async fn verify_payment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<DataResponse<Transaction>>> {
    let transaction = TransactionRepo::find_by_id_and_order(
        &state.pool,
        input.transaction_id,
        &input.gateway_order_id,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Transaction",
        id: input.transaction_id,
    }))?;

    if transaction.status != TransactionStatus::Pending {
        return Err(AppError::Core(CoreError::Conflict(
            "Transaction has already been finalized".into(),
        )));
    }

    let valid = state.gateway.verify_signature(
        &input.gateway_order_id,
        &input.gateway_payment_id,
        &input.gateway_signature,
    );
    if !valid {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid payment signature".into(),
        )));
    }

    let completed = TransactionRepo::mark_completed(
        &state.pool,
        transaction.id,
        &input.gateway_payment_id,
        &input.gateway_signature,
    )
    .await?
    .ok_or_else(|| {
        // Raced with a concurrent finalization.
        AppError::Core(CoreError::Conflict(
            "Transaction has already been finalized".into(),
        ))
    })?;

    Ok(Json(DataResponse { data: completed }))
}

/// GET /api/v1/transactions?status=&search=
pub async fn list_for_lawyer(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<TransactionView>>>> {
    let transactions = TransactionRepo::list_for_lawyer(
        &state.pool,
        lawyer.profile.id,
        query.status,
        query.search.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: transactions }))
}

/// GET /api/v1/transactions/stats
pub async fn stats_for_lawyer(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
) -> AppResult<Json<DataResponse<TransactionStats>>> {
    let stats = TransactionRepo::stats_for_lawyer(&state.pool, lawyer.profile.id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// PATCH /api/v1/transactions/{id}/update
///
/// Manual status update by the owning lawyer, restricted to `failed` and
/// `refunded` on a pending transaction. Completion goes through
/// verify-payment only.
pub async fn update_status(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<Transaction>>> {
    if !matches!(
        input.status,
        TransactionStatus::Failed | TransactionStatus::Refunded
    ) {
        return Err(AppError::Core(CoreError::Validation(
            "Status must be 'failed' or 'refunded'".into(),
        )));
    }

    let updated =
        TransactionRepo::update_status_manual(&state.pool, id, lawyer.profile.id, input.status)
            .await?;

    match updated {
        Some(transaction) => Ok(Json(DataResponse { data: transaction })),
        None => Err(explain_guard_miss(&state, id, lawyer.profile.id).await?),
    }
}

/// DELETE /api/v1/transactions/{id}/delete
///
/// Delete a pending payment request. Anything past pending is immutable
/// history and rejects.
pub async fn delete(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TransactionRepo::delete_pending(&state.pool, id, lawyer.profile.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(explain_guard_miss(&state, id, lawyer.profile.id).await?)
    }
}

// ---------------------------------------------------------------------------
// Client side
// ---------------------------------------------------------------------------

/// GET /api/v1/transactions/clients/payment-requests?status=
pub async fn client_payment_requests(
    State(state): State<AppState>,
    client: ClientIdentity,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<TransactionView>>>> {
    let transactions =
        TransactionRepo::list_for_client(&state.pool, client.profile.id, query.status).await?;
    Ok(Json(DataResponse { data: transactions }))
}

/// GET /api/v1/transactions/clients/payment-requests/stats
pub async fn client_stats(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> AppResult<Json<DataResponse<TransactionStats>>> {
    let stats = TransactionRepo::stats_for_client(&state.pool, client.profile.id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// POST /api/v1/transactions/clients/payments/{id}/pay
///
/// Hand the client the stored gateway order and public key for checkout.
/// Does not touch transaction state; completion happens via verify-payment.
pub async fn pay(
    State(state): State<AppState>,
    client: ClientIdentity,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let transaction = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;

    if transaction.client_id != client.profile.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "This payment request belongs to another client".into(),
        )));
    }
    if transaction.status != TransactionStatus::Pending {
        return Err(AppError::Core(CoreError::Conflict(
            "Transaction has already been finalized".into(),
        )));
    }

    let order_id = transaction.gateway_order_id.clone().ok_or_else(|| {
        AppError::InternalError("Pending transaction is missing its gateway order".into())
    })?;

    Ok(Json(json!({
        "order_id": order_id,
        "amount": to_minor_units(transaction.amount)?,
        "currency": CURRENCY,
        "key_id": state.gateway.key_id(),
        "description": transaction.description,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a decimal amount to integer minor currency units (paise).
fn to_minor_units(amount: Decimal) -> AppResult<i64> {
    (amount * Decimal::from(100))
        .round()
        .to_i64()
        .ok_or_else(|| AppError::Core(CoreError::Validation("Amount out of range".into())))
}

/// After a guarded update or delete matched no rows, explain why: missing
/// (404), someone else's transaction (403), or no longer pending (400).
async fn explain_guard_miss(
    state: &AppState,
    id: DbId,
    lawyer_id: DbId,
) -> AppResult<AppError> {
    let existing = TransactionRepo::find_by_id(&state.pool, id).await?;
    Ok(match existing {
        None => AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }),
        Some(t) if t.lawyer_id != lawyer_id => AppError::Core(CoreError::Forbidden(
            "This transaction belongs to another lawyer".into(),
        )),
        Some(_) => AppError::Core(CoreError::Validation(
            "Only pending transactions can be modified".into(),
        )),
    })
}
