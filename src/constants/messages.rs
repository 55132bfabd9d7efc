//! Success message constants used throughout the application.

pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_FOUND: &str = "User found";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
