//! User repository backed by a MongoDB collection.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::models::{User, UserDocument};
use crate::repositories::{StoreError, UserStore};
use crate::utils::log_sanitizer::mask_email;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Repository for user-related database operations.
pub struct MongoUserRepository {
    db: Database,
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create the unique index on `email`.
    ///
    /// Called once during startup; creating an index that already exists is a no-op.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        info!("Creating database indexes for users collection...");

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
        let user = User::register(name, email);
        debug!(
            "Repository: Inserting user {} ({})",
            user.id,
            mask_email(email)
        );

        self.collection
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(|err| {
                if is_duplicate_key(err.kind.as_ref()) {
                    StoreError::DuplicateEmail {
                        email: email.to_string(),
                    }
                } else {
                    err.into()
                }
            })?;

        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

fn is_duplicate_key(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
