//! MongoDB implementation of the product repository

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::options::{FindOptions, UpdateOptions};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductUpsert, UpsertOutcome};
use crate::repository::ProductRepository;

const COLLECTION_NAME: &str = "products";

/// MongoDB-backed product repository
#[derive(Debug, Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a repository bound to the `products` collection of the database
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Create a repository over an explicit collection (used by tests)
    pub fn with_collection(collection: Collection<Product>) -> Self {
        Self { collection }
    }

    async fn fetch_required(&self, id: ObjectId) -> ProductResult<Product> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn page(&self, limit: i64, skip: u64) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder().limit(limit).skip(skip).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_user_email(&self, email: &str) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! { "userEmail": email }).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self, input), fields(item_name = %input.item_name))]
    async fn insert(&self, input: ProductUpsert) -> ProductResult<Product> {
        let product = Product::new(input);
        self.collection.insert_one(&product).await?;
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn upsert(&self, id: ObjectId, input: ProductUpsert) -> ProductResult<UpsertOutcome> {
        let fields =
            bson::to_document(&input).map_err(|e| ProductError::Database(e.to_string()))?;

        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .with_options(options)
            .await?;

        if result.upserted_id.is_some() {
            return Ok(UpsertOutcome::Created(self.fetch_required(id).await?));
        }
        if result.modified_count > 0 {
            return Ok(UpsertOutcome::Updated(self.fetch_required(id).await?));
        }
        Ok(UpsertOutcome::Unchanged)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    async fn test_repository() -> MongoProductRepository {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let db = client.database("domain_products_test");
        MongoProductRepository::new(&db)
    }

    fn sample_input(email: &str) -> ProductUpsert {
        ProductUpsert {
            photo_url: "https://example.com/ball.png".to_string(),
            item_name: "Match Ball".to_string(),
            category_name: "Football".to_string(),
            price: 35.0,
            rating: 4.0,
            customization: "None".to_string(),
            processing_time: "1 day".to_string(),
            stock_status: "In Stock".to_string(),
            user_name: "Seller".to_string(),
            user_email: email.to_string(),
            description: "FIFA approved".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // requires a running MongoDB instance
    async fn test_insert_and_find_by_id() {
        let repo = test_repository().await;
        let inserted = repo.insert(sample_input("a@example.com")).await.unwrap();

        let found = repo.find_by_id(inserted.id).await.unwrap();
        assert_eq!(found.unwrap().item_name, "Match Ball");

        repo.delete(inserted.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // requires a running MongoDB instance
    async fn test_upsert_creates_then_reports_unchanged() {
        let repo = test_repository().await;
        let id = ObjectId::new();

        let outcome = repo.upsert(id, sample_input("b@example.com")).await.unwrap();
        assert!(matches!(outcome, UpsertOutcome::Created(_)));

        // Identical payload, nothing changes
        let outcome = repo.upsert(id, sample_input("b@example.com")).await.unwrap();
        assert!(matches!(outcome, UpsertOutcome::Unchanged));

        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // requires a running MongoDB instance
    async fn test_find_by_user_email_filters() {
        let repo = test_repository().await;
        let inserted = repo.insert(sample_input("owner@example.com")).await.unwrap();

        let owned = repo.find_by_user_email("owner@example.com").await.unwrap();
        assert!(owned.iter().any(|p| p.id == inserted.id));

        let other = repo.find_by_user_email("nobody@example.com").await.unwrap();
        assert!(other.iter().all(|p| p.id != inserted.id));

        repo.delete(inserted.id).await.unwrap();
    }
}
