//! Common validation utilities and helpers.

use actix_web::error::JsonPayloadError;
use actix_web::HttpRequest;
use log::warn;
use validator::ValidationErrors;

use crate::constants::{CODE_INVALID_FORMAT, CODE_VALIDATION_FAILED};
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are ordered by field name so responses are stable.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let errors: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{}'", field))
            })
        })
        .collect();
    warn!("Validation failed: {:?}", errors);
    ApiError::ValidationError {
        code: CODE_VALIDATION_FAILED.to_string(),
        errors,
    }
}

/// Error handler for `web::JsonConfig`.
///
/// Malformed bodies, missing fields and wrong content types are reported
/// with the standard error envelope instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected JSON payload: {}", err);
    ApiError::BadRequest {
        code: CODE_INVALID_FORMAT.to_string(),
        message: err.to_string(),
    }
    .into()
}
