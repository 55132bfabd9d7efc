//! User service delegating user creation and lookup to a [`UserStore`].

use std::sync::Arc;

use log::debug;

use crate::models::User;
use crate::repositories::{StoreError, UserStore};

/// Service layer between the HTTP handlers and the user store.
///
/// Calls are forwarded unchanged and store errors are returned as-is; turning
/// them into HTTP responses is the handlers' job.
pub struct UserService {
    repository: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserStore>) -> Self {
        Self { repository }
    }

    /// Get the underlying repository (for sharing with other components).
    pub fn repository(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.repository)
    }

    pub async fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
        self.repository.create(name, email).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        debug!("Fetching user by ID: {}", id);
        self.repository.get_user(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Store that returns a canned user and records how it was called.
    struct StubStore {
        user: User,
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        last_args: Mutex<Vec<String>>,
    }

    impl StubStore {
        fn new() -> Self {
            let created_at = Utc::now() - Duration::days(30);
            Self {
                user: User {
                    id: "abc-123".to_string(),
                    name: "Jane Doe".to_string(),
                    email: "jane@example.com".to_string(),
                    created_at,
                    updated_at: created_at + Duration::days(1),
                },
                create_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
                last_args: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserStore for StubStore {
        async fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = vec![name.to_string(), email.to_string()];
            Ok(self.user.clone())
        }

        async fn get_user(&self, id: &str) -> Result<User, StoreError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = vec![id.to_string()];
            if id == self.user.id {
                Ok(self.user.clone())
            } else {
                Err(StoreError::NotFound { id: id.to_string() })
            }
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    /// Store whose backend is always down.
    struct FailingStore;

    #[async_trait]
    impl UserStore for FailingStore {
        async fn create(&self, _name: &str, _email: &str) -> Result<User, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get_user(&self, _id: &str) -> Result<User, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_create_delegates_once_and_returns_store_value() {
        let store = Arc::new(StubStore::new());
        let service = UserService::new(store.clone());

        let user = service.create("Jane Doe", "jane@example.com").await.unwrap();

        assert_eq!(store.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *store.last_args.lock().unwrap(),
            vec!["Jane Doe".to_string(), "jane@example.com".to_string()]
        );
        assert_eq!(user, store.user);
    }

    #[actix_web::test]
    async fn test_get_user_delegates_once_and_returns_store_value() {
        let store = Arc::new(StubStore::new());
        let service = UserService::new(store.clone());

        let user = service.get_user("abc-123").await.unwrap();

        assert_eq!(store.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*store.last_args.lock().unwrap(), vec!["abc-123".to_string()]);
        assert_eq!(user.id, store.user.id);
        assert_eq!(user.created_at, store.user.created_at);
        assert_eq!(user.updated_at, store.user.updated_at);
    }

    #[actix_web::test]
    async fn test_get_user_passes_not_found_through() {
        let service = UserService::new(Arc::new(StubStore::new()));
        let err = service.get_user("nonexistent-id").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[actix_web::test]
    async fn test_store_failure_passes_through() {
        let service = UserService::new(Arc::new(FailingStore));
        let err = service
            .create("Jane Doe", "jane@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
