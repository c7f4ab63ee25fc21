//! `ValidatedJson` extractor: JSON body plus `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use authgate_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that has been deserialized and validated.
///
/// Malformed JSON, unknown permission strings and rule violations all
/// reject with `InvalidData`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::invalid_data(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::invalid_data(format!("Validation failed: {e}")))?;

        Ok(Self(value))
    }
}
