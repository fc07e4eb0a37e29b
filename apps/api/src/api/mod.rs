//! API routes module
//!
//! Wires the domain routers and app-level endpoints into one router. The
//! domain routers register absolute paths, so everything is merged at the
//! root to keep the legacy storefront URLs.

pub mod health;
pub mod products;
pub mod users;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(users::router(state))
        .merge(products::router(state))
        .merge(health::router(state.clone()))
}

/// Plain-text liveness response at the root path
async fn root() -> &'static str {
    "Sports gear API is running"
}
