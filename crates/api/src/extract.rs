//! Request body extractors for the city controller.

use axum::extract::{FromRequest, Request};
use axum::Json;
use cities_core::city::CityFormValues;

use crate::error::AppError;

/// JSON body of a city create or update.
///
/// Bodies that are not JSON, or whose `name` is neither a string nor
/// `null`, are rejected as [`AppError::BadRequest`] with the usual
/// `{error, code}` payload instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct CityPayload(pub CityFormValues);

impl<S: Send + Sync> FromRequest<S> for CityPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<CityFormValues>::from_request(req, state).await {
            Ok(Json(values)) => Ok(CityPayload(values)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected city payload");
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
