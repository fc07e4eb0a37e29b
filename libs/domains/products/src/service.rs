//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductKey, ProductLookup, ProductPage, ProductUpsert, UpsertOutcome};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Handles validation and the key dispatch for the dual-purpose lookup
/// route, delegating data access to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product without pagination
    #[instrument(skip(self))]
    pub async fn list_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// List a page of products.
    ///
    /// Non-positive limits are coerced to the default page size before they
    /// reach the store.
    #[instrument(skip(self), fields(limit = page.limit, skip = page.skip))]
    pub async fn list_products(&self, page: ProductPage) -> ProductResult<Vec<Product>> {
        self.repository.page(page.effective_limit(), page.skip).await
    }

    /// Get a single product by identifier
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: bson::oid::ObjectId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Get every product owned by the given seller email
    #[instrument(skip(self))]
    pub async fn get_products_by_email(&self, email: &str) -> ProductResult<Vec<Product>> {
        let products = self.repository.find_by_user_email(email).await?;
        if products.is_empty() {
            return Err(ProductError::NoneForEmail(email.to_string()));
        }
        Ok(products)
    }

    /// Resolve a lookup key.
    ///
    /// An email key yields the owner's products; an id key yields the single
    /// matching document. The two branches keep their distinct wire shapes.
    #[instrument(skip(self))]
    pub async fn get_by_key(&self, key: ProductKey) -> ProductResult<ProductLookup> {
        match key {
            ProductKey::Email(email) => Ok(ProductLookup::Owned(
                self.get_products_by_email(&email).await?,
            )),
            ProductKey::Id(id) => Ok(ProductLookup::Single(self.get_product(id).await?)),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(item_name = %input.item_name))]
    pub async fn create_product(&self, input: ProductUpsert) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.insert(input).await
    }

    /// Overwrite all writable fields of a product, creating it when absent
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: bson::oid::ObjectId,
        input: ProductUpsert,
    ) -> ProductResult<UpsertOutcome> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.upsert(id, input).await
    }

    /// Delete a product, returning the number of removed documents
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: bson::oid::ObjectId) -> ProductResult<u64> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(ProductError::NotFound(id));
        }
        Ok(deleted)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use bson::oid::ObjectId;

    fn sample_input(email: &str) -> ProductUpsert {
        ProductUpsert {
            photo_url: "https://example.com/glove.png".to_string(),
            item_name: "Keeper Glove".to_string(),
            category_name: "Football".to_string(),
            price: 45.0,
            rating: 4.2,
            customization: "Sizes S-XL".to_string(),
            processing_time: "2 days".to_string(),
            stock_status: "In Stock".to_string(),
            user_name: "Seller".to_string(),
            user_email: email.to_string(),
            description: "Latex palm".to_string(),
        }
    }

    fn sample_product(email: &str) -> Product {
        Product::new(sample_input(email))
    }

    #[tokio::test]
    async fn test_list_products_forwards_pagination() {
        let mut repo = MockProductRepository::new();
        repo.expect_page()
            .withf(|limit, skip| *limit == 6 && *skip == 12)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        let products = service
            .list_products(ProductPage { limit: 6, skip: 12 })
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_zero_limit_is_coerced_before_the_store() {
        let mut repo = MockProductRepository::new();
        repo.expect_page()
            .withf(|limit, skip| *limit == 6 && *skip == 0)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        service
            .list_products(ProductPage { limit: 0, skip: 0 })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_by_key_email_uses_owner_filter() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_user_email()
            .withf(|email| email == "owner@example.com")
            .times(1)
            .returning(|email| Ok(vec![sample_product(email)]));
        repo.expect_find_by_id().times(0);

        let service = ProductService::new(repo);
        let lookup = service
            .get_by_key(ProductKey::Email("owner@example.com".to_string()))
            .await
            .unwrap();
        match lookup {
            ProductLookup::Owned(products) => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].user_email, "owner@example.com");
            }
            ProductLookup::Single(_) => panic!("email key must resolve to the owned list"),
        }
    }

    #[tokio::test]
    async fn test_get_by_key_id_yields_single_document() {
        let id = ObjectId::new();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .withf(move |lookup| *lookup == id)
            .times(1)
            .returning(|_| Ok(Some(sample_product("owner@example.com"))));
        repo.expect_find_by_user_email().times(0);

        let service = ProductService::new(repo);
        let lookup = service.get_by_key(ProductKey::Id(id)).await.unwrap();

        // The id branch answers with the bare document, never an array
        assert!(matches!(lookup, ProductLookup::Single(_)));
        let json = serde_json::to_value(&lookup).unwrap();
        assert!(json.is_object());
        assert!(json.get("itemName").is_some());
    }

    #[tokio::test]
    async fn test_get_by_key_email_with_no_products_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_user_email().returning(|_| Ok(vec![]));

        let service = ProductService::new(repo);
        let err = service
            .get_by_key(ProductKey::Email("ghost@example.com".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NoneForEmail(_)));
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_rating() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().times(0);

        let service = ProductService::new(repo);
        let mut input = sample_input("seller@example.com");
        input.rating = 9.0;
        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_product_inserts_valid_input() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(repo);
        let product = service
            .create_product(sample_input("seller@example.com"))
            .await
            .unwrap();
        assert_eq!(product.item_name, "Keeper Glove");
    }

    #[tokio::test]
    async fn test_update_product_passes_through_outcome() {
        let id = ObjectId::new();
        let mut repo = MockProductRepository::new();
        repo.expect_upsert()
            .times(1)
            .returning(|_, _| Ok(UpsertOutcome::Unchanged));

        let service = ProductService::new(repo);
        let outcome = service
            .update_product(id, sample_input("seller@example.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, UpsertOutcome::Unchanged));
    }

    #[tokio::test]
    async fn test_update_product_rejects_invalid_input_before_repo() {
        let mut repo = MockProductRepository::new();
        repo.expect_upsert().times(0);

        let service = ProductService::new(repo);
        let mut input = sample_input("seller@example.com");
        input.photo_url = "not a url".to_string();
        let err = service
            .update_product(ObjectId::new(), input)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_product_zero_count_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let service = ProductService::new(repo);
        let err = service.delete_product(ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product_returns_count() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(1));

        let service = ProductService::new(repo);
        let deleted = service.delete_product(ObjectId::new()).await.unwrap();
        assert_eq!(deleted, 1);
    }
}
