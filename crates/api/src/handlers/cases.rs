//! Handlers for legal cases and their documents (`/lawyers/cases`).

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use casebridge_core::error::CoreError;
use casebridge_core::types::DbId;
use casebridge_db::models::legal_case::{
    CaseDocument, CasePriority, CaseStatus, CaseWithClient, CreateLegalCase, LegalCase,
    UpdateLegalCase,
};
use casebridge_db::repositories::{CaseDocumentRepo, ClientProfileRepo, LegalCaseRepo};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::identity::{ClientIdentity, LawyerIdentity};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /lawyers/cases`.
#[derive(Debug, Deserialize)]
pub struct CreateCaseRequest {
    pub title: Option<String>,
    pub client_id: Option<DbId>,
    pub court: Option<String>,
    pub case_number: Option<String>,
    pub next_hearing: Option<NaiveDate>,
    pub status: Option<CaseStatus>,
    pub priority: Option<CasePriority>,
}

/// GET /api/v1/lawyers/cases
///
/// The lawyer's own cases, newest first, each with its documents embedded.
pub async fn list_for_lawyer(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
) -> AppResult<Json<DataResponse<Vec<serde_json::Value>>>> {
    let cases = LegalCaseRepo::list_for_lawyer(&state.pool, lawyer.profile.id).await?;
    let entries = embed_documents(&state, cases).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/lawyers/cases/client
///
/// Cases where the caller is the client, newest first, with documents.
pub async fn list_for_client(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> AppResult<Json<DataResponse<Vec<serde_json::Value>>>> {
    let cases = LegalCaseRepo::list_for_client(&state.pool, client.profile.id).await?;
    let entries = embed_documents(&state, cases).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/lawyers/cases
///
/// Create a case. The case number is globally unique; a duplicate surfaces
/// as 409 via the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Json(input): Json<CreateCaseRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<LegalCase>>)> {
    let title = require_text(input.title, "title")?;
    let court = require_text(input.court, "court")?;
    let case_number = require_text(input.case_number, "case_number")?;
    let client_id = input.client_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("client_id is required".into()))
    })?;
    let next_hearing = input.next_hearing.ok_or_else(|| {
        AppError::Core(CoreError::Validation("next_hearing is required".into()))
    })?;

    ClientProfileRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client profile",
            id: client_id,
        }))?;

    let case = LegalCaseRepo::create(
        &state.pool,
        &CreateLegalCase {
            title,
            client_id,
            lawyer_id: lawyer.profile.id,
            court,
            case_number,
            next_hearing,
            status: input.status,
            priority: input.priority,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: case })))
}

/// PATCH /api/v1/lawyers/cases/{id}
///
/// Patch status, priority, or next hearing date. Refreshes `last_update`.
pub async fn update(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLegalCase>,
) -> AppResult<Json<DataResponse<LegalCase>>> {
    if input.status.is_none() && input.priority.is_none() && input.next_hearing.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one of status, priority, or next_hearing is required".into(),
        )));
    }

    let updated = LegalCaseRepo::update(&state.pool, id, lawyer.profile.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/lawyers/cases/{id}/upload-document (multipart)
pub async fn upload_document(
    State(state): State<AppState>,
    lawyer: LawyerIdentity,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<CaseDocument>>)> {
    LegalCaseRepo::find_for_lawyer(&state.pool, id, lawyer.profile.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id,
        }))?;

    let mut title = None;
    let mut stored = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => {
                title = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Malformed multipart body: {e}"))
                })?);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Malformed multipart body: {e}"))
                })?;
                let path = crate::storage::save_upload(
                    &state.config.media_dir,
                    "case_documents",
                    &file_name,
                    &bytes,
                )
                .await?;
                stored = Some((file_name, path));
            }
            _ => {}
        }
    }

    let (file_name, file_path) = stored.ok_or_else(|| {
        AppError::Core(CoreError::Validation("A document file is required".into()))
    })?;
    let title = title.filter(|t| !t.trim().is_empty()).unwrap_or(file_name);

    let document = CaseDocumentRepo::create(&state.pool, id, &title, &file_path).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_text(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("{field} is required"))))
}

/// Attach each case's document list for the listing endpoints.
async fn embed_documents(
    state: &AppState,
    cases: Vec<CaseWithClient>,
) -> AppResult<Vec<serde_json::Value>> {
    let mut entries = Vec::with_capacity(cases.len());
    for case in cases {
        let documents = CaseDocumentRepo::list_for_case(&state.pool, case.id).await?;
        let mut entry = serde_json::to_value(&case)
            .map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))?;
        entry["documents"] = json!(documents);
        entries.push(entry);
    }
    Ok(entries)
}
