//! # ShelfDB
//!
//! A single-user library catalog manager with:
//! - Book records persisted as one pretty-printed JSON file
//! - Add, delete, search, list and loan-status updates
//! - Interactive numbered-menu console
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Shell                         │
//! │              (menu loop, prompts, reports)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Catalog                                │
//! │        (load → compute → save if mutated)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Vec<Book>
//!                       ▼
//!               ┌──────────────┐
//!               │  BookStore   │
//!               │ (books.json) │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod ops;
pub mod catalog;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use catalog::Catalog;
pub use model::{Book, BookStatus, NewBook};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
