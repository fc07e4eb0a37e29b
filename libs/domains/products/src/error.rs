//! Error types for the Products domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use bson::oid::ObjectId;
use thiserror::Error;

/// Errors surfaced by product operations
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(ObjectId),

    #[error("No products found for {0}")]
    NoneForEmail(String),

    #[error("Product not found or no changes made")]
    NotModified,

    #[error("Invalid product key: {0}")]
    InvalidKey(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result alias for product operations
pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {id} not found")),
            ProductError::NoneForEmail(_) => {
                AppError::NotFound("No products found for this email".to_string())
            }
            ProductError::NotModified => {
                AppError::NotFound("Product not found or no changes made".to_string())
            }
            ProductError::InvalidKey(key) => {
                AppError::BadRequest(format!("Invalid product key: {key}"))
            }
            ProductError::Validation(details) => AppError::BadRequest(details),
            ProductError::Database(details) => AppError::Database(details),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ProductError::NotFound(ObjectId::new()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_modified_maps_to_404() {
        let response = ProductError::NotModified.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_key_maps_to_400() {
        let response = ProductError::InvalidKey("???".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ProductError::Validation("rating out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_maps_to_500() {
        let response = ProductError::Database("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
