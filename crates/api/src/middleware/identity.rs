//! Role-gated identity extractors.
//!
//! Each extractor wraps [`AuthUser`], checks the role claim, and loads the
//! caller's profile row so handlers get the profile id (the key used by
//! hires, cases, appointments, and transactions) without re-querying.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casebridge_core::error::CoreError;
use casebridge_core::roles::{ROLE_CLIENT, ROLE_LAWYER};
use casebridge_db::models::client_profile::ClientProfile;
use casebridge_db::models::lawyer_profile::LawyerProfile;
use casebridge_db::repositories::{ClientProfileRepo, LawyerProfileRepo};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a `client` caller with an existing client profile.
/// Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn client_only(client: ClientIdentity) -> AppResult<Json<()>> {
///     tracing::info!(client_id = client.profile.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct ClientIdentity {
    pub user: AuthUser,
    pub profile: ClientProfile,
}

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CLIENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Client role required".into(),
            )));
        }
        let profile = ClientProfileRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Client profile not found".into()))
            })?;
        Ok(ClientIdentity { user, profile })
    }
}

/// Requires a `lawyer` caller with an existing lawyer profile.
/// Rejects with 403 Forbidden otherwise.
pub struct LawyerIdentity {
    pub user: AuthUser,
    pub profile: LawyerProfile,
}

impl FromRequestParts<AppState> for LawyerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_LAWYER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Lawyer role required".into(),
            )));
        }
        let profile = LawyerProfileRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Lawyer profile not found".into()))
            })?;
        Ok(LawyerIdentity { user, profile })
    }
}
