//! Location Normalization
//!
//! Maps the raw location mentions the preprocessor extracted onto the
//! canonical province/region taxonomy. At most one province and one region
//! resolve per query; a resolved province's mapped region always wins over
//! an independently detected region keyword.
//!
//! ## Submodules
//! - **`tables`**: Static canonical province list (with region mapping) and
//!   region-keyword table.
//! - **`normalizer`**: Longest-match-first resolution.

pub mod normalizer;
pub mod tables;

pub use normalizer::{normalize_name, resolve, LocationTarget};

#[cfg(test)]
mod tests;
