//! JSON body extractor that runs `validator` rules before the handler.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use bizdocs_core::error::AppError;

/// Deserializes a JSON body and validates it.
///
/// Malformed bodies and failed rules both become `Validation` errors, so
/// clients always receive the JSON error shape.
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
            .map_err(|rejection| {
                AppError::validation(format!("Invalid JSON body: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(missing_fields_message(&errors)))?;

        Ok(Self(value))
    }
}

/// `"Missing fields: a, b"` with field names in sorted order.
fn missing_fields_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
    fields.sort_unstable();
    if fields.is_empty() {
        "Missing fields".to_string()
    } else {
        format!("Missing fields: {}", fields.join(", "))
    }
}
