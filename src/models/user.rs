use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// `id`, `created_at` and `updated_at` are assigned by the store when the
/// user is created and never change afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record with a generated id and matching timestamps.
    ///
    /// Timestamps are truncated to milliseconds, the precision BSON keeps,
    /// so a stored user reads back identical to the one returned on create.
    pub fn register(name: &str, email: &str) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// User document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: bson::DateTime::from_millis(user.created_at.timestamp_millis()),
            updated_at: bson::DateTime::from_millis(user.updated_at.timestamp_millis()),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            created_at: DateTime::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(doc.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
