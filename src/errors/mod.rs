use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_INTERNAL_ERROR, CODE_USER_NOT_FOUND, ERR_EMAIL_EXISTS, ERR_INTERNAL,
    ERR_USER_NOT_FOUND, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;
use crate::repositories::StoreError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    InternalServerError { code: String, message: String },
    ServiceUnavailable { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::Conflict { code, message } => {
                write!(f, "Conflict [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ServiceUnavailable { code, message } => {
                write!(f, "Service Unavailable [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::Conflict { code, message }
            | ApiError::InternalServerError { code, message }
            | ApiError::ServiceUnavailable { code, message } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            },
            ApiError::ValidationError { code, errors } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound {
                code: CODE_USER_NOT_FOUND.to_string(),
                message: ERR_USER_NOT_FOUND.to_string(),
            },
            StoreError::DuplicateEmail { .. } => ApiError::Conflict {
                code: CODE_EMAIL_EXISTS.to_string(),
                message: ERR_EMAIL_EXISTS.to_string(),
            },
            StoreError::Unavailable(cause) => {
                // The driver message can leak connection details, so it stays in the log.
                error!("User store failure: {}", cause);
                ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: ERR_INTERNAL.to_string(),
                }
            }
        }
    }
}
