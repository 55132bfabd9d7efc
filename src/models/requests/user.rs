//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_name;

/// Request payload for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name (1-100 characters, not only whitespace)
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
}
