//! Interactive Shell
//!
//! Menu-driven console loop over any line reader and writer.
//!
//! ## Menu
//! ```text
//! 1. Add book            → title, author, year
//! 2. Delete book         → id
//! 3. Search books        → criteria, query
//! 4. List all books
//! 5. Update book status  → id, status
//! 6. Exit
//! ```
//!
//! Choices are matched exactly; anything else shows the menu again.

mod menu;
mod session;

pub use menu::{MenuChoice, MENU};
pub use session::Session;
