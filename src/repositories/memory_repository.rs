//! Process-local user repository.
//!
//! Records live for as long as the process does. Useful for tests and for
//! running the service without a database (`USER_STORE=memory`).

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use crate::models::User;
use crate::repositories::{StoreError, UserStore};
use crate::utils::log_sanitizer::mask_email;

/// Thread-safe in-memory user repository using DashMap for concurrent access.
#[derive(Default)]
pub struct InMemoryUserRepository {
    /// Map of user id -> user
    users: DashMap<String, User>,
    /// Map of email -> user id, enforcing email uniqueness
    emails: DashMap<String, String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
        // The email slot stays locked until the user is inserted.
        match self.emails.entry(email.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail {
                email: email.to_string(),
            }),
            Entry::Vacant(slot) => {
                let user = User::register(name, email);
                debug!(
                    "Repository: Inserting user {} ({})",
                    user.id,
                    mask_email(email)
                );
                slot.insert(user.id.clone());
                self.users.insert(user.id.clone(), user.clone());
                Ok(user)
            }
        }
    }

    async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        self.users
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
