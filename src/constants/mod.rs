//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the service:
//! error messages, success messages, machine-readable error codes and
//! collection names.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
