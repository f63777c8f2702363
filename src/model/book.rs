//! Book record definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Loan state of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// On the shelf
    #[default]
    Available,

    /// Lent out
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Issued => "issued",
        }
    }
}

impl FromStr for BookStatus {
    type Err = ShelfError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "issued" => Ok(Self::Issued),
            _ => Err(ShelfError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog record
///
/// Field order matches the on-disk object layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, positive, assigned at creation
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {} ({}) - {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Validated input for adding a book (everything but the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: String,
    author: String,
    year: i32,
}

impl NewBook {
    /// Validate and trim the text fields
    ///
    /// Returns `InvalidInput` when title or author is blank.
    pub fn new(title: &str, author: &str, year: i32) -> Result<Self> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() {
            return Err(ShelfError::InvalidInput("title must not be empty".to_string()));
        }
        if author.is_empty() {
            return Err(ShelfError::InvalidInput("author must not be empty".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Turn into a stored record with the given id and the default status
    pub fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            status: BookStatus::default(),
        }
    }
}

/// Next free id for a collection: max + 1, or 1 when empty
///
/// Fails with `IdSpaceExhausted` when the highest id is `u64::MAX`.
pub fn next_id(books: &[Book]) -> Result<u64> {
    match books.iter().map(|b| b.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(ShelfError::IdSpaceExhausted(max)),
    }
}
