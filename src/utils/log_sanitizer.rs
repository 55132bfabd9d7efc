//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are personal data; anything that reaches the log goes through
//! [`mask_email`] first.

/// Number of leading characters left visible.
const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps the first three characters of the local part and the whole domain.
/// Works on characters, not bytes, so non-ASCII addresses never panic.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("jane@example.com"), "jan***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(s: &str) -> &str {
    match s.char_indices().nth(VISIBLE_CHARS) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
