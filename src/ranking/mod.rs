//! Vector Ranking Engine
//!
//! TF-IDF scoring of location records against a processed query string.
//! The fitted vectorizer, the precomputed term-weight matrix and the
//! row-ordered record id list are produced offline and loaded once at
//! process start as a co-versioned artifact bundle.
//!
//! ## Submodules
//! - **`artifacts`**: Bundle file formats and the structural invariant
//!   checks enforced at load time.
//! - **`engine`**: The explicit-ready engine exposing `score_all` and
//!   `score_subset` over cosine similarity.

pub mod artifacts;
pub mod engine;

pub use artifacts::ArtifactBundle;
pub use engine::TfidfEngine;

#[cfg(test)]
mod tests;
