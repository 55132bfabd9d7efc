use actix_web::{web, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{CODE_SERVICE_UNAVAILABLE, ERR_STORE_UNAVAILABLE, MSG_SERVER_RUNNING};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::UserService;
use crate::validators::json_error_handler;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Register a user
        .route("/user", web::post().to(handlers::create_user))
        // Get specific user by ID
        .route("/user/{id}", web::get().to(handlers::get_user));
}

/// Health check
///
/// Reports 503 when the user store cannot be reached.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server and user store are up", body = HealthResponse),
        (status = 503, description = "User store unavailable", body = crate::models::ErrorResponse)
    )
)]
pub async fn health_check(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    user_service.repository().ping().await.map_err(|err| {
        warn!("Health check failed: {}", err);
        ApiError::ServiceUnavailable {
            code: CODE_SERVICE_UNAVAILABLE.to_string(),
            message: ERR_STORE_UNAVAILABLE.to_string(),
        }
    })?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    }))
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
