//! Handlers for the `/users` resource (signup, login, refresh, logout, profile).

use axum::extract::State;
use axum::http::StatusCode;
use casebridge_core::catalog::{
    is_valid_experience_band, is_valid_specialization, DEFAULT_SPECIALIZATION,
};
use casebridge_core::error::CoreError;
use casebridge_core::types::DbId;
use casebridge_db::models::client_profile::CreateClientProfile;
use casebridge_db::models::lawyer_profile::CreateLawyerProfile;
use casebridge_db::models::user::{CreateUser, UserRole};
use casebridge_db::repositories::{
    ClientProfileRepo, HireRepo, LawyerProfileRepo, LegalCaseRepo, SessionRepo, UserRepo,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/signup`.
///
/// Role-specific profile fields are flattened into one body; which of them
/// are required depends on `role`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub role: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    // Client profile fields.
    pub phone_number: Option<String>,
    pub address: Option<String>,
    // Lawyer profile fields.
    pub bar_registration_number: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /users/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users/signup
///
/// Register a new client or lawyer account plus its role-specific profile.
/// Returns 201 with access and refresh tokens.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // 1. Validate the common fields.
    let role = UserRole::parse(&input.role)
        .filter(|r| matches!(r, UserRole::Client | UserRole::Lawyer))
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Role must be 'client' or 'lawyer'".into(),
            ))
        })?;

    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }
    if input.full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Full name is required".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::email_exists(&state.pool, &email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    // 2. Validate the role-specific profile fields before creating anything.
    let lawyer_fields = match role {
        UserRole::Lawyer => Some(validate_lawyer_fields(&state, &input).await?),
        _ => None,
    };

    // 3. Create the user row.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            role,
        },
    )
    .await?;

    // 4. Create the role-specific profile.
    match lawyer_fields {
        Some(fields) => {
            LawyerProfileRepo::create(
                &state.pool,
                &CreateLawyerProfile {
                    user_id: user.id,
                    full_name: input.full_name.trim().to_string(),
                    bar_registration_number: fields.bar_registration_number,
                    specialization: fields.specialization,
                    experience_years: fields.experience_years,
                    location: fields.location,
                    bio: fields.bio,
                },
            )
            .await?;
        }
        None => {
            ClientProfileRepo::create(
                &state.pool,
                &CreateClientProfile {
                    user_id: user.id,
                    full_name: input.full_name.trim().to_string(),
                    address: input.address.unwrap_or_default(),
                    phone_number: input.phone_number.unwrap_or_default(),
                },
            )
            .await?;
        }
    }

    // 5. Issue tokens.
    let response = create_auth_response(&state, user.id, &user.email, role.as_str()).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/users/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim().to_lowercase();

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = create_auth_response(&state, user.id, &user.email, user.role.as_str()).await?;
    Ok(Json(response))
}

/// POST /api/v1/users/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find matching active session.
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Find the user and issue new tokens.
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, user.id, &user.email, user.role.as_str()).await?;
    Ok(Json(response))
}

/// POST /api/v1/users/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/profile
///
/// The current user with its embedded role-specific profile. Lawyer profiles
/// carry derived `number_of_cases` and `number_of_clients` counters.
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    let body = match user.role {
        UserRole::Lawyer => {
            let profile = LawyerProfileRepo::find_by_user_id(&state.pool, user.id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Lawyer profile",
                    id: user.id,
                }))?;

            let number_of_cases = LegalCaseRepo::count_for_lawyer(&state.pool, profile.id).await?;
            let number_of_clients =
                HireRepo::count_distinct_accepted_clients(&state.pool, profile.id).await?;

            json!({
                "id": user.id,
                "email": user.email,
                "role": user.role,
                "profile": profile,
                "number_of_cases": number_of_cases,
                "number_of_clients": number_of_clients,
            })
        }
        _ => {
            let profile = ClientProfileRepo::find_by_user_id(&state.pool, user.id).await?;
            json!({
                "id": user.id,
                "email": user.email,
                "role": user.role,
                "profile": profile,
            })
        }
    };

    Ok(Json(body))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validated lawyer-specific signup fields with defaults applied.
struct LawyerSignupFields {
    bar_registration_number: String,
    specialization: String,
    experience_years: String,
    location: String,
    bio: String,
}

async fn validate_lawyer_fields(
    state: &AppState,
    input: &SignupRequest,
) -> AppResult<LawyerSignupFields> {
    let bar = input
        .bar_registration_number
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Bar registration number is required for lawyers".into(),
            ))
        })?;

    if LawyerProfileRepo::bar_number_exists(&state.pool, bar).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Bar registration number is already registered".into(),
        )));
    }

    let specialization = input
        .specialization
        .clone()
        .unwrap_or_else(|| DEFAULT_SPECIALIZATION.to_string());
    if !is_valid_specialization(&specialization) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown specialization '{specialization}'"
        ))));
    }

    let experience_years = input.experience_years.clone().unwrap_or_else(|| "0-2".to_string());
    if !is_valid_experience_band(&experience_years) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown experience band '{experience_years}'"
        ))));
    }

    Ok(LawyerSignupFields {
        bar_registration_number: bar.to_string(),
        specialization,
        experience_years,
        location: input.location.clone().unwrap_or_default(),
        bio: input.bio.clone().unwrap_or_default(),
    })
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    user_id: DbId,
    email: &str,
    role: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = casebridge_db::models::session::CreateSession {
        user_id,
        refresh_token_hash: refresh_hash,
        expires_at,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user_id,
            email: email.to_string(),
            role: role.to_string(),
        },
    })
}
