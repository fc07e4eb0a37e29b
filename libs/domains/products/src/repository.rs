//! Repository trait for product data access

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{Product, ProductUpsert, UpsertOutcome};

/// Data access operations for products.
///
/// Implementations are expected to be cheap to clone or shared behind an
/// `Arc`; the service layer holds them behind one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product without pagination
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Fetch a page of products
    async fn page(&self, limit: i64, skip: u64) -> ProductResult<Vec<Product>>;

    /// Fetch a single product by its identifier
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Fetch every product owned by the given seller email
    async fn find_by_user_email(&self, email: &str) -> ProductResult<Vec<Product>>;

    /// Insert a new product and return the stored document
    async fn insert(&self, input: ProductUpsert) -> ProductResult<Product>;

    /// Overwrite all writable fields of the document with the given id,
    /// creating it when absent
    async fn upsert(&self, id: ObjectId, input: ProductUpsert) -> ProductResult<UpsertOutcome>;

    /// Delete the product with the given id, returning the deleted count
    async fn delete(&self, id: ObjectId) -> ProductResult<u64>;
}
