//! ObjectId path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use bson::oid::ObjectId;

/// Extractor for ObjectId path parameters.
///
/// Automatically parses and validates a 24-hex document identifier from the
/// path, returning a structured 400 response if malformed.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Product ID: {}", id.to_hex())
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match ObjectId::parse_str(&id) {
            Ok(oid) => Ok(ObjectIdPath(oid)),
            Err(_) => {
                Err(AppError::BadRequest(format!("Invalid identifier: {}", id)).into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;

    #[test]
    fn test_valid_object_id_parses() {
        let id = ObjectId::new().to_hex();
        assert!(ObjectId::parse_str(&id).is_ok());
    }

    #[test]
    fn test_non_hex_identifier_rejected() {
        assert!(ObjectId::parse_str("not-a-valid-id").is_err());
    }

    #[test]
    fn test_wrong_length_identifier_rejected() {
        assert!(ObjectId::parse_str("abcdef").is_err());
    }
}
