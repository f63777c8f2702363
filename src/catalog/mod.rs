//! Catalog Module
//!
//! Executes catalog commands against the book store.
//!
//! ## Responsibilities
//! - Route commands to the matching operation
//! - Load the collection, compute, save only when it changed
//! - Match records for search
//!
//! Every operation works on a freshly loaded collection; nothing is cached
//! between calls.

mod search;
mod service;

pub use search::SearchCriteria;
pub use service::Catalog;
