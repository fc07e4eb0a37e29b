//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by exact email match
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<User> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }

    /// Create a new user
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.insert(input).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
