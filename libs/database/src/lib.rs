//! Database library providing the MongoDB connector and utilities.
//!
//! This library owns connection management for the document store: typed
//! configuration, connection with retry, and health checks.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("sports_gear");
//! let collection = db.collection::<Document>("products");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{retry, retry_with_backoff, RetryConfig};
