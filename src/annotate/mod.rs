//! Tagging Annotator Interface
//!
//! The linguistic preprocessor needs, per token, a surface form, a
//! part-of-speech tag and a named-entity label. That work is delegated to an
//! external Vietnamese NLP sidecar (VnCoreNLP-style) spoken to over HTTP.
//!
//! ## Responsibilities
//! - **`types`**: The tagged-token shape shared with the preprocessor.
//! - **`client`**: The `Annotator` trait (the seam the preprocessor depends
//!   on) and its `reqwest`-based implementation.
//!
//! Annotator failures are fatal for the query they interrupt and are not
//! retried; the orchestrator recovers them into an error response.

pub mod client;
pub mod types;

pub use client::{Annotator, HttpAnnotator};
pub use types::{Sentence, TaggedToken};

#[cfg(test)]
mod tests;
