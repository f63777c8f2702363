//! Storage Module
//!
//! Persists the whole catalog to a single JSON file.
//!
//! ## Responsibilities
//! - Load the full collection (missing file = empty collection)
//! - Reject files that are not a valid record array
//! - Overwrite the full collection on save
//! - Assign ids by rescanning the persisted collection
//!
//! ## File Format
//! ```text
//! [
//!     { "id": 1, "title": ..., "author": ..., "year": ..., "status": ... },
//!     { "id": 2, ... },
//!     ...
//! ]
//! ```
//! Pretty-printed, one field per line, indentation from `Config::indent`.
//! Saves replace the file in place; a crash mid-write can leave it corrupt.

mod store;

pub use store::BookStore;
