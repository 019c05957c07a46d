//! Request extractors shared across handlers.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use casebridge_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor that reports malformed bodies through [`AppError`].
///
/// Axum's stock `Json` answers a bad body with its own 422 rejection; this
/// wrapper routes the rejection into the standard error envelope instead, so
/// an unparseable body and a rejected field value both come back as a 400
/// `VALIDATION_ERROR`. Also usable in response position.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(rejection.body_text()))),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
