use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - represents a catalog document stored in MongoDB.
///
/// Field names on the wire keep the store's original camelCase contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// Product image URL
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// Display name
    pub item_name: String,
    /// Category label (free-form, no taxonomy enforced)
    pub category_name: String,
    /// Price in the store currency
    pub price: f64,
    /// Customer rating, 0 to 5
    pub rating: f64,
    /// Customization options offered by the seller
    pub customization: String,
    /// Expected processing/delivery time
    pub processing_time: String,
    /// Stock availability label
    pub stock_status: String,
    /// Seller display name
    pub user_name: String,
    /// Seller email; links the product to its owner by value only
    pub user_email: String,
    /// Long-form description
    pub description: String,
}

/// DTO carrying the eleven writable product fields.
///
/// Used both for creation and for the full-field overwrite performed by the
/// upsert endpoint: the `$set` document is built from this struct, so the
/// stored document always holds exactly these fields (plus `_id`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpsert {
    #[serde(rename = "photoURL")]
    #[validate(url)]
    pub photo_url: String,
    #[validate(length(min = 1, max = 200))]
    pub item_name: String,
    #[validate(length(min = 1, max = 100))]
    pub category_name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub customization: String,
    pub processing_time: String,
    pub stock_status: String,
    pub user_name: String,
    #[validate(email)]
    pub user_email: String,
    pub description: String,
}

/// Pagination parameters for the paged product listing.
///
/// Defaults mirror the legacy contract: `limit=6`, `skip=0`.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductPage {
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub skip: u64,
}

impl ProductPage {
    /// Limit to hand to the store.
    ///
    /// A non-positive `limit` falls back to the default of 6: the driver
    /// treats `limit: 0` as "no limit", which would dump the collection.
    pub fn effective_limit(&self) -> i64 {
        if self.limit <= 0 {
            default_limit()
        } else {
            self.limit
        }
    }
}

impl Default for ProductPage {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            skip: 0,
        }
    }
}

fn default_limit() -> i64 {
    6
}

/// Typed key for the dual-purpose `/products/{key}` route.
///
/// Decision table:
///
/// | key shape            | branch                          |
/// |----------------------|---------------------------------|
/// | contains `@`         | filter products by `userEmail`  |
/// | 24-hex ObjectId      | lookup by `_id`                 |
/// | anything else        | rejected as an invalid key      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    /// Owner email; selects every product whose `userEmail` matches
    Email(String),
    /// Document identifier
    Id(ObjectId),
}

impl std::str::FromStr for ProductKey {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('@') {
            Ok(ProductKey::Email(s.to_string()))
        } else {
            ObjectId::parse_str(s).map(ProductKey::Id)
        }
    }
}

/// Result of the dual-purpose lookup route.
///
/// The email branch answers with the owner's products as an array; the id
/// branch answers with the single matching document. Serialization is
/// untagged so each branch keeps its legacy wire shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductLookup {
    /// Every product owned by the looked-up email
    Owned(Vec<Product>),
    /// The document matching the looked-up identifier
    Single(Product),
}

/// Outcome of the full-field upsert operation
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    /// An existing document was overwritten with at least one field change
    Updated(Product),
    /// No document matched the identifier; one was created from the input
    Created(Product),
    /// A document matched but every field already held the submitted value
    Unchanged,
}

impl Product {
    /// Create a new product document from the writable fields
    pub fn new(input: ProductUpsert) -> Self {
        Self {
            id: ObjectId::new(),
            photo_url: input.photo_url,
            item_name: input.item_name,
            category_name: input.category_name,
            price: input.price,
            rating: input.rating,
            customization: input.customization,
            processing_time: input.processing_time,
            stock_status: input.stock_status,
            user_name: input.user_name,
            user_email: input.user_email,
            description: input.description,
        }
    }
}
