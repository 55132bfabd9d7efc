//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{ERR_NAME_BLANK, ERR_NAME_LENGTH};

/// Maximum length of a user's name, counted in characters after trimming.
pub const MAX_NAME_LENGTH: usize = 100;

/// Custom validator for the name field.
/// Rejects names that are empty once trimmed or longer than [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut error = ValidationError::new("name_blank");
        error.message = Some(ERR_NAME_BLANK.into());
        return Err(error);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        let mut error = ValidationError::new("name_length");
        error.message = Some(ERR_NAME_LENGTH.into());
        return Err(error);
    }
    Ok(())
}
