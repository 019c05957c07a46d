//! Handlers for the `/appointments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use casebridge_core::error::CoreError;
use casebridge_core::types::DbId;
use casebridge_db::models::appointment::{
    Appointment, AppointmentStatus, AppointmentWithNames, CreateAppointment,
};
use casebridge_db::repositories::{AppointmentRepo, ClientProfileRepo};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::DataResponse;
use crate::middleware::identity::{ClientIdentity, LawyerIdentity};
use crate::state::AppState;

/// Request body for `POST /appointments/schedule-appointment`.
///
/// Fields are optional so missing values surface as 400 with a message
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// The client's user id.
    pub user_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
}

/// Request body for `PATCH /appointments/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: AppointmentStatus,
}

/// POST /api/v1/appointments/schedule-appointment
///
/// A lawyer schedules an appointment with an existing client.
pub async fn schedule(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Json(input): Json<ScheduleRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Appointment>>)> {
    let user_id = input.user_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("user_id is required".into()))
    })?;
    let appointment_date = input.appointment_date.ok_or_else(|| {
        AppError::Core(CoreError::Validation("appointment_date is required".into()))
    })?;
    let appointment_time = input.appointment_time.ok_or_else(|| {
        AppError::Core(CoreError::Validation("appointment_time is required".into()))
    })?;

    let client_profile = ClientProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client profile",
            id: user_id,
        }))?;

    let appointment = AppointmentRepo::create(
        &state.pool,
        &CreateAppointment {
            client_id: client_profile.id,
            lawyer_id: lawyer.profile.id,
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            appointment_date,
            appointment_time,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: appointment })))
}

/// GET /api/v1/appointments
///
/// The lawyer's appointments, most recent date first.
pub async fn list_for_lawyer(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
) -> AppResult<Json<DataResponse<Vec<AppointmentWithNames>>>> {
    let appointments = AppointmentRepo::list_for_lawyer(&state.pool, lawyer.profile.id).await?;
    Ok(Json(DataResponse { data: appointments }))
}

/// GET /api/v1/appointments/client
pub async fn list_for_client(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> AppResult<Json<DataResponse<Vec<AppointmentWithNames>>>> {
    let appointments = AppointmentRepo::list_for_client(&state.pool, client.profile.id).await?;
    Ok(Json(DataResponse { data: appointments }))
}

/// PATCH /api/v1/appointments/{id}/status
///
/// The owning lawyer updates the appointment status.
pub async fn update_status(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<StatusRequest>,
) -> AppResult<Json<DataResponse<Appointment>>> {
    let updated =
        AppointmentRepo::update_status(&state.pool, id, lawyer.profile.id, input.status).await?;

    match updated {
        Some(appointment) => Ok(Json(DataResponse { data: appointment })),
        None => Err(not_found_or_forbidden(&state, id).await?),
    }
}

/// DELETE /api/v1/appointments/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AppointmentRepo::delete(&state.pool, id, lawyer.profile.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found_or_forbidden(&state, id).await?)
    }
}

/// Distinguish a missing appointment (404) from one owned by another lawyer
/// (403) after a scoped update matched no rows.
async fn not_found_or_forbidden(state: &AppState, id: DbId) -> AppResult<AppError> {
    if AppointmentRepo::find_by_id(&state.pool, id).await?.is_some() {
        Ok(AppError::Core(CoreError::Forbidden(
            "Only the owning lawyer can modify this appointment".into(),
        )))
    } else {
        Ok(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))
    }
}
