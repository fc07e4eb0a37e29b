//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Base document carrying API-level metadata
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports Gear API",
        version = "0.1.0",
        description = "MongoDB-based REST API for the sports gear store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Products", description = "Sports gear catalog endpoints")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation for all APIs.
///
/// The domain routers register absolute paths (`/users`, `/products`, ...),
/// so their documents are merged rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}
