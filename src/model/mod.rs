//! Record Model
//!
//! The shape of a catalog record and the rule for assigning its id.
//!
//! ## Record Format
//! ```text
//! {
//!     "id": 1,
//!     "title": "Dune",
//!     "author": "Herbert",
//!     "year": 1965,
//!     "status": "available"
//! }
//! ```
//!
//! ## Status Transitions
//! ```text
//!   available ◄──── update_status ────► issued
//! ```
//! No transition happens on its own; only an explicit status update moves
//! a book between states.

mod book;

pub use book::{next_id, Book, BookStatus, NewBook};
