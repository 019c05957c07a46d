//! Handlers for the `/lawyers` resource: directory, profile management,
//! verification documents, ratings, and the client roster.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use casebridge_core::catalog::{is_valid_experience_band, is_valid_specialization};
use casebridge_core::error::CoreError;
use casebridge_core::rating::validate_rating;
use casebridge_core::types::DbId;
use casebridge_db::models::hire::LawyerClientEntry;
use casebridge_db::models::lawyer_document::CreateLawyerDocuments;
use casebridge_db::models::lawyer_profile::{LawyerProfile, UpdateLawyerProfile};
use casebridge_db::models::user::UserRole;
use casebridge_db::repositories::{
    HireRepo, LawyerDocumentRepo, LawyerProfileRepo, RatingRepo, UserRepo,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::identity::{ClientIdentity, LawyerIdentity};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /lawyers/rate`.
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub lawyer_id: DbId,
    pub rating: i16,
}

/// Query parameters for `GET /lawyers/check-lawyer-rating`.
#[derive(Debug, Deserialize)]
pub struct CheckRatingQuery {
    pub lawyer_id: DbId,
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// GET /api/v1/lawyers/list
///
/// All lawyer accounts with their profiles, excluding the reserved bot user.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<serde_json::Value>>>> {
    let users =
        UserRepo::list_by_role_excluding(&state.pool, UserRole::Lawyer, state.bot_user_id).await?;

    let mut entries = Vec::with_capacity(users.len());
    for user in users {
        let profile = LawyerProfileRepo::find_by_user_id(&state.pool, user.id).await?;
        entries.push(json!({
            "id": user.id,
            "email": user.email,
            "profile": profile,
        }));
    }

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/lawyers/detail/{user_id}
pub async fn detail(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .filter(|u| u.role == UserRole::Lawyer)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lawyer",
            id: user_id,
        }))?;

    let profile = LawyerProfileRepo::find_by_user_id(&state.pool, user.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lawyer profile",
            id: user_id,
        }))?;

    Ok(Json(json!({
        "id": user.id,
        "email": user.email,
        "profile": profile,
    })))
}

/// PUT /api/v1/lawyers/update-profile
///
/// Partial update of the caller's own lawyer profile. `is_verified` and
/// `rating` are not client-writable and are absent from the patch type.
pub async fn update_profile(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Json(input): Json<UpdateLawyerProfile>,
) -> AppResult<Json<DataResponse<LawyerProfile>>> {
    if let Some(specialization) = &input.specialization {
        if !is_valid_specialization(specialization) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown specialization '{specialization}'"
            ))));
        }
    }
    if let Some(band) = &input.experience_years {
        if !is_valid_experience_band(band) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown experience band '{band}'"
            ))));
        }
    }

    let updated = LawyerProfileRepo::update(&state.pool, lawyer.profile.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lawyer profile",
            id: lawyer.profile.id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Verification documents
// ---------------------------------------------------------------------------

/// GET /api/v1/lawyers/documents
pub async fn get_documents(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
) -> AppResult<Json<serde_json::Value>> {
    let documents = LawyerDocumentRepo::find_by_lawyer_id(&state.pool, lawyer.profile.id).await?;
    Ok(Json(json!({
        "uploaded": documents.is_some(),
        "documents": documents,
    })))
}

/// POST /api/v1/lawyers/documents (multipart)
///
/// One-time verification document upload. A repeat upload is a no-op (204);
/// the document set is immutable once stored.
pub async fn upload_documents(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    mut multipart: Multipart,
) -> AppResult<StatusCode> {
    if LawyerDocumentRepo::find_by_lawyer_id(&state.pool, lawyer.profile.id)
        .await?
        .is_some()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let mut photo_id_path = None;
    let mut cop_path = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?;

        match name.as_str() {
            "photo_id" => {
                let path = crate::storage::save_upload(
                    &state.config.media_dir,
                    "lawyer_documents",
                    &file_name,
                    &bytes,
                )
                .await?;
                photo_id_path = Some(path);
            }
            "certificate_of_practice" => {
                let path = crate::storage::save_upload(
                    &state.config.media_dir,
                    "lawyer_documents",
                    &file_name,
                    &bytes,
                )
                .await?;
                cop_path = Some(path);
            }
            _ => {} // unknown fields ignored
        }
    }

    if photo_id_path.is_none() && cop_path.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one document file is required".into(),
        )));
    }

    LawyerDocumentRepo::create(
        &state.pool,
        &CreateLawyerDocuments {
            lawyer_id: lawyer.profile.id,
            photo_id_path,
            cop_path,
        },
    )
    .await?;

    Ok(StatusCode::CREATED)
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// POST /api/v1/lawyers/rate
///
/// Upsert the caller's rating for a lawyer, then recompute the lawyer's
/// displayed rating from all current ratings.
pub async fn rate(
    State(state): State<AppState>,
    client: ClientIdentity,
    Json(input): Json<RateRequest>,
) -> AppResult<Json<serde_json::Value>> {
    validate_rating(input.rating).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    LawyerProfileRepo::find_by_id(&state.pool, input.lawyer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lawyer profile",
            id: input.lawyer_id,
        }))?;

    let stored =
        RatingRepo::upsert(&state.pool, client.profile.id, input.lawyer_id, input.rating).await?;
    let lawyer_rating = RatingRepo::recompute_lawyer_rating(&state.pool, input.lawyer_id).await?;

    Ok(Json(json!({
        "rating": stored,
        "lawyer_rating": lawyer_rating,
    })))
}

/// GET /api/v1/lawyers/check-lawyer-rating?lawyer_id=
pub async fn check_rating(
    State(state): State<AppState>,
    client: ClientIdentity,
    Query(query): Query<CheckRatingQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = RatingRepo::find_by_pair(&state.pool, client.profile.id, query.lawyer_id).await?;

    Ok(Json(json!({
        "has_rated": existing.is_some(),
        "rating": existing.map(|r| r.rating),
    })))
}

// ---------------------------------------------------------------------------
// Client roster
// ---------------------------------------------------------------------------

/// GET /api/v1/lawyers/clients/{lawyer_id}
///
/// The lawyer's client roster with per-client case counts. Only the lawyer's
/// own roster is visible.
pub async fn clients(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(lawyer_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<LawyerClientEntry>>>> {
    if lawyer_id != lawyer.profile.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot view another lawyer's clients".into(),
        )));
    }

    let entries = HireRepo::clients_for_lawyer(&state.pool, lawyer_id).await?;
    Ok(Json(DataResponse { data: entries }))
}
