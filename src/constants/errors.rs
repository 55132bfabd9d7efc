//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_NAME_BLANK: &str = "Name must not be blank";
pub const ERR_NAME_LENGTH: &str = "Name must be at most 100 characters";

// Infrastructure errors
pub const ERR_INTERNAL: &str = "An internal error occurred";
pub const ERR_STORE_UNAVAILABLE: &str = "User store is unavailable";
