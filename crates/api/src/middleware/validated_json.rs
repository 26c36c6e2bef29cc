//! JSON body extractor that enforces `validator` rules before the handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use portfolio_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A JSON request body that has been deserialized and validated.
///
/// Malformed JSON, a missing required field and any failed field rule all
/// reject with `400 VALIDATION_ERROR`:
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProfile>) -> AppResult<Json<Profile>> {
///     // `input` already satisfies every `#[validate(...)]` attribute.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        value.validate().map_err(CoreError::from)?;

        Ok(ValidatedJson(value))
    }
}
