//! Search Orchestration
//!
//! Coordinates the preprocessor, location normalizer, ranking engine and
//! record store into the two-bucket search response: matches inside the
//! named province, and other similar matches. All infrastructure failures
//! are recovered into structured (error-titled) responses here; a caller
//! never sees a raw fault for a bad query.
//!
//! ## Submodules
//! - **`service`**: The `SearchService` decision tree (ranking mode
//!   selection, negation filtering, province partition, threshold,
//!   truncation, titles).
//! - **`handlers`**: Axum request handlers for the thin HTTP layer.
//! - **`types`**: Response DTOs.

pub mod handlers;
pub mod service;
pub mod types;

pub use service::SearchService;
pub use types::{Bucket, ProvinceBucket, QueryDetails, RankedLocation, SearchResponse};
