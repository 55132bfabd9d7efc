//! User handlers for registration and lookup.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{MSG_USER_CREATED, MSG_USER_FOUND};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateUserRequest, UserResponse};
use crate::services::UserService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, sent as `{ success, message, data }` with the user in `data`", body = UserResponse),
        (status = 400, description = "Validation error or malformed body", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse),
        (status = 500, description = "User store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let CreateUserRequest { name, email } = body.into_inner();
    let user = user_service.create(&name, &email).await?;

    info!("Created user {} ({})", user.id, mask_email(&user.email));
    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_CREATED, user_response)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found, sent as `{ success, message, data }` with the user in `data`", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "User store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user(&user_id).await?;

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_FOUND, user_response)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::constants::{
        CODE_EMAIL_EXISTS, CODE_INVALID_FORMAT, CODE_USER_NOT_FOUND, CODE_VALIDATION_FAILED,
    };
    use crate::models::UserResponse;
    use crate::repositories::InMemoryUserRepository;
    use crate::routes::configure_routes;
    use crate::services::UserService;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
    }

    #[actix_web::test]
    async fn test_create_user_returns_created_record() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body["data"]["createdAt"].is_string());
        assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
        assert!(body["data"].get("created_at").is_none());
    }

    #[actix_web::test]
    async fn test_get_user_round_trips_created_record() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let created: UserResponse = serde_json::from_value(body["data"].clone()).unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/user/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let fetched: UserResponse = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/user/nonexistent-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], CODE_USER_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_invalid_fields() {
        let service = user_service();
        let app = test::init_service(
            App::new()
                .app_data(service.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "  ", "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], CODE_VALIDATION_FAILED);
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn test_create_user_rejects_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": \"Jane Doe\"")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], CODE_INVALID_FORMAT);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_missing_email() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], CODE_INVALID_FORMAT);
    }

    #[actix_web::test]
    async fn test_create_user_duplicate_email_is_409() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_routes),
        )
        .await;

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/user")
                .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            if expected == StatusCode::CONFLICT {
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["code"], CODE_EMAIL_EXISTS);
            }
        }
    }
}
