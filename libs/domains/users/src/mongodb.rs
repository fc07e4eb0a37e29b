//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository over the `users` collection
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self, input), fields(user_email = %input.email))]
    async fn insert(&self, input: CreateUser) -> UserResult<User> {
        let user = User::new(input);

        self.collection.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }
}
