use utoipa::OpenApi;

use crate::models::{CreateUserRequest, ErrorResponse, HealthResponse, UserResponse};

/// OpenAPI documentation for the User Registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry API",
        version = "0.1.0",
        description = "Register users and fetch them by id.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User registration and lookup")
    ),
    paths(
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
