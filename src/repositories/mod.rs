//! Repository layer for user persistence.
//!
//! The service layer only sees the [`UserStore`] trait. Two backends are
//! provided: MongoDB for deployments and an in-memory map for tests and
//! database-less runs.

pub mod memory_repository;
pub mod mongo_repository;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

pub use memory_repository::InMemoryUserRepository;
pub use mongo_repository::MongoUserRepository;

/// Errors raised by a [`UserStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user `{id}` not found")]
    NotFound { id: String },

    #[error("email `{email}` is already registered")]
    DuplicateEmail { email: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence of user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user, assigning its id and timestamps.
    async fn create(&self, name: &str, email: &str) -> Result<User, StoreError>;

    /// Look a user up by id.
    async fn get_user(&self, id: &str) -> Result<User, StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
