//! Record Store
//!
//! The relational store holding location records is an external
//! collaborator; the core only ever reads it, keyed by id or by
//! province/region filter. This module owns the seam (`RecordStore`) and an
//! in-memory implementation seeded from a JSON file, which backs local runs
//! and tests. Data management (creating and updating records) happens
//! elsewhere.
//!
//! ## Submodules
//! - **`records`**: The record shape and the `RecordStore` trait.
//! - **`memory`**: DashMap-backed implementation.

pub mod memory;
pub mod records;

pub use memory::MemoryStore;
pub use records::{LocationRecord, RecordStore};
