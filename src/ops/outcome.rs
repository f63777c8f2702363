//! Outcome definitions
//!
//! Represents the result reported back to the operator.

use std::fmt;

use crate::model::Book;

/// Result of a successfully executed command
///
/// Not-found is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new book was stored
    Added(Book),

    /// The book was removed
    Deleted(Book),

    /// No book has this id; nothing was saved
    NotFound { id: u64 },

    /// Search results, possibly empty
    Found(Vec<Book>),

    /// Full listing, possibly empty
    Listed(Vec<Book>),

    /// The book after its status was overwritten
    StatusUpdated(Book),
}

impl Outcome {
    /// Records carried by this outcome
    pub fn books(&self) -> &[Book] {
        match self {
            Outcome::Added(book) | Outcome::Deleted(book) | Outcome::StatusUpdated(book) => {
                std::slice::from_ref(book)
            }
            Outcome::Found(books) | Outcome::Listed(books) => books,
            Outcome::NotFound { .. } => &[],
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(book) => {
                write!(f, "Book '{}' added with ID {}.", book.title, book.id)
            }
            Outcome::Deleted(book) => write!(f, "Book with ID {} deleted.", book.id),
            Outcome::NotFound { id } => write!(f, "Book with ID {} not found.", id),
            Outcome::Found(books) if books.is_empty() => f.write_str("No books found."),
            Outcome::Listed(books) if books.is_empty() => {
                f.write_str("The catalog is empty.")
            }
            Outcome::Found(books) | Outcome::Listed(books) => write_lines(f, books),
            Outcome::StatusUpdated(book) => write!(
                f,
                "Status of book with ID {} updated to {}.",
                book.id, book.status
            ),
        }
    }
}

/// One book per line, no trailing newline
fn write_lines(f: &mut fmt::Formatter<'_>, books: &[Book]) -> fmt::Result {
    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        write!(f, "{}", book)?;
    }
    Ok(())
}
