//! Handlers for the `/hire` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use casebridge_core::error::CoreError;
use casebridge_core::types::DbId;
use casebridge_db::models::hire::{Hire, HireStatus, HireWithLawyer};
use casebridge_db::repositories::{HireRepo, LawyerProfileRepo};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::DataResponse;
use crate::middleware::identity::{ClientIdentity, LawyerIdentity};
use crate::state::AppState;

/// Fixed deposit charged when a hire request is created, marked paid
/// immediately.
fn deposit_amount() -> Decimal {
    Decimal::new(50000, 2) // 500.00
}

/// Request body for `PATCH /hire/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub status: HireStatus,
}

/// POST /api/v1/hire/lawyer/{lawyer_id}
///
/// Create a hire request against a lawyer profile. Starts as `pending` with
/// the fixed deposit recorded as paid.
pub async fn hire_lawyer(
    State(state): State<AppState>,
    client: ClientIdentity,
    Path(lawyer_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Hire>>)> {
    LawyerProfileRepo::find_by_id(&state.pool, lawyer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lawyer profile",
            id: lawyer_id,
        }))?;

    let hire = HireRepo::create(
        &state.pool,
        client.profile.id,
        lawyer_id,
        deposit_amount(),
        true,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: hire })))
}

/// PATCH /api/v1/hire/{id}/respond
///
/// The hire's lawyer accepts or rejects a pending request. The transition is
/// one guarded row update; a request that is no longer pending conflicts.
pub async fn respond(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<Json<DataResponse<Hire>>> {
    if !input.status.is_valid_response() {
        return Err(AppError::Core(CoreError::Validation(
            "Status must be 'accepted' or 'rejected'".into(),
        )));
    }

    let hire = HireRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hire",
            id,
        }))?;

    if hire.lawyer_id != lawyer.profile.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the hired lawyer can respond to this request".into(),
        )));
    }

    let updated = HireRepo::respond(&state.pool, id, input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Hire request has already been responded to".into(),
            ))
        })?;

    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/v1/hire/client/hire-requests
///
/// The caller's own hire requests, newest first.
pub async fn client_hire_requests(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> AppResult<Json<DataResponse<Vec<HireWithLawyer>>>> {
    let hires = HireRepo::list_for_client(&state.pool, client.profile.id).await?;
    Ok(Json(DataResponse { data: hires }))
}
