//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_FORMAT: &str = "INVALID_FORMAT";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const CODE_SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
