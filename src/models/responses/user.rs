//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "3f0c8a52-6a3e-4a8f-9d0b-2f4f6f1c9e21")]
    pub id: String,
    /// User's display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
