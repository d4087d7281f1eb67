//! Vietnamese Travel Location Search Library
//!
//! This library crate defines the core modules behind the search backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The pipeline is composed of loosely coupled subsystems:
//!
//! - **`annotate`**: The linguistic annotation client. Talks to the external
//!   Vietnamese NLP sidecar that tokenizes queries and tags each token with
//!   part-of-speech and named-entity labels.
//! - **`preprocess`**: The query understanding layer. Turns raw query text
//!   into general, negated and location keyword sets, with synonym expansion
//!   and negation scoping.
//! - **`location`**: The geographic taxonomy. Normalizes extracted place
//!   names to a canonical province and its region.
//! - **`ranking`**: The information retrieval core. Loads the offline TF-IDF
//!   artifact bundle and scores records by cosine similarity.
//! - **`store`**: The record layer. An in-memory location catalog behind the
//!   `RecordStore` trait.
//! - **`search`**: The orchestrator and HTTP surface. Wires the pipeline into
//!   a two-bucket response and exposes it over axum handlers.

pub mod annotate;
pub mod config;
pub mod error;
pub mod location;
pub mod preprocess;
pub mod ranking;
pub mod search;
pub mod store;
