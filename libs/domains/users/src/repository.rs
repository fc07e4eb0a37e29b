use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users. Implementations
/// can use different storage backends (MongoDB in production, mocks in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user document in the collection
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Find a single user by exact email match
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a new user
    async fn insert(&self, input: CreateUser) -> UserResult<User>;
}
