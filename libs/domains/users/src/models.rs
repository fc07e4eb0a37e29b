use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity - represents a user document stored in MongoDB.
///
/// Field names on the wire keep the store's original contract: the identifier
/// is `_id` and the avatar field is `photoURL`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// Email address, the lookup key for this collection.
    ///
    /// No uniqueness is enforced at this layer; the collection may hold
    /// several documents with the same email.
    pub email: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(
        default,
        rename = "photoURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, rename = "photoURL")]
    #[validate(url)]
    pub photo_url: Option<String>,
}

impl User {
    /// Create a new user document from a CreateUser DTO
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: ObjectId::new(),
            email: input.email,
            name: input.name,
            photo_url: input.photo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_user_serializes_wire_names() {
        let user = User::new(CreateUser {
            email: "rider@example.com".to_string(),
            name: Some("Rider".to_string()),
            photo_url: Some("https://example.com/rider.png".to_string()),
        });

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["email"], "rider@example.com");
        assert_eq!(json["photoURL"], "https://example.com/rider.png");
        assert!(json.get("photo_url").is_none());
    }

    #[test]
    fn test_user_optional_fields_omitted_when_absent() {
        let user = User::new(CreateUser {
            email: "bare@example.com".to_string(),
            name: None,
            photo_url: None,
        });

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("photoURL").is_none());
    }

    #[test]
    fn test_create_user_rejects_invalid_email() {
        let input = CreateUser {
            email: "not-an-email".to_string(),
            name: None,
            photo_url: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_invalid_photo_url() {
        let input = CreateUser {
            email: "rider@example.com".to_string(),
            name: None,
            photo_url: Some("not a url".to_string()),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_user_accepts_minimal_document() {
        let input: CreateUser =
            serde_json::from_str(r#"{"email": "rider@example.com"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.name.is_none());
        assert!(input.photo_url.is_none());
    }
}
