//! HTTP handlers for the Products API
//!
//! Routes keep the legacy storefront contract: `/all_products` for the full
//! dump, `/products` for the paged listing, and a dual-purpose
//! `/products/{key}` lookup where a key containing `@` is an owner email.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestObjectIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ObjectIdPath, ValidatedJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductKey, ProductLookup, ProductPage, ProductUpsert, UpsertOutcome};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_all_products,
        list_products,
        get_products_by_key,
        create_product,
        update_product,
        delete_product
    ),
    components(
        schemas(Product, ProductUpsert, ProductLookup, DeleteProductResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestObjectIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Sports gear catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Response body for a successful delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteProductResponse {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/all_products", get(list_all_products))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{key}",
            get(get_products_by_key)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List every product without pagination
#[utoipa::path(
    get,
    path = "/all_products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_all_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_all_products().await?;
    Ok(Json(products))
}

/// List a page of products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductPage),
    responses(
        (status = 200, description = "Page of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(page): Query<ProductPage>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(page).await?;
    Ok(Json(products))
}

/// Look up products by owner email or by identifier.
///
/// An email key answers with the owner's products as an array; an id key
/// answers with the single document.
#[utoipa::path(
    get,
    path = "/products/{key}",
    tag = "Products",
    params(
        ("key" = String, Path, description = "Owner email (contains '@') or product identifier")
    ),
    responses(
        (status = 200, description = "Matching products (array for an email key, single document for an id key)", body = ProductLookup),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_key<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(key): Path<String>,
) -> ProductResult<Json<ProductLookup>> {
    let key: ProductKey = key
        .parse()
        .map_err(|_| ProductError::InvalidKey(key.clone()))?;
    let lookup = service.get_by_key(key).await?;
    Ok(Json(lookup))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductUpsert,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductUpsert>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Overwrite all writable fields of a product, creating it when absent
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    request_body = ProductUpsert,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<ProductUpsert>,
) -> ProductResult<impl IntoResponse> {
    match service.update_product(id, input).await? {
        UpsertOutcome::Updated(product) => Ok((StatusCode::OK, Json(product))),
        UpsertOutcome::Created(product) => Ok((StatusCode::CREATED, Json(product))),
        UpsertOutcome::Unchanged => Err(ProductError::NotModified),
    }
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<Json<DeleteProductResponse>> {
    let deleted_count = service.delete_product(id).await?;
    Ok(Json(DeleteProductResponse { deleted_count }))
}
