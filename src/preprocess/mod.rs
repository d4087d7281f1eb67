//! Linguistic Preprocessing
//!
//! Turns raw Vietnamese query text into the three keyword sets the rest of
//! the pipeline runs on: general keywords (ranking terms), negated keywords
//! (terms the user wants excluded) and location keywords (surface forms
//! naming places).
//!
//! ## Submodules
//! - **`synonyms`**: Static keyword -> equivalents table, loaded once at
//!   startup from a JSON dictionary.
//! - **`extractor`**: The preprocessor itself: normalization, tagging via
//!   the external annotator, location-span extraction, negation scoping and
//!   keyword assembly. Also carries the simpler synonym-expansion contract
//!   used when no negation/location structure is needed.
//! - **`types`**: Output shapes.

pub mod extractor;
pub mod synonyms;
pub mod types;

pub use extractor::Preprocessor;
pub use synonyms::SynonymTable;
pub use types::{ExpandedQuery, KeywordSets};
