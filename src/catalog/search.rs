//! Search criteria and matching

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShelfError};
use crate::model::Book;

/// Field a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Case-insensitive substring of the title
    Title,

    /// Case-insensitive substring of the author
    Author,

    /// Exact match against the year as text
    Year,
}

impl SearchCriteria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }

    /// Whether `book` matches `query` under this criteria
    pub fn matches(&self, book: &Book, query: &str) -> bool {
        self.matches_lowered(book, &query.to_lowercase())
    }

    /// Keep the books matching `query`, in their original order
    pub fn filter(&self, books: Vec<Book>, query: &str) -> Vec<Book> {
        let query = query.to_lowercase();
        books
            .into_iter()
            .filter(|book| self.matches_lowered(book, &query))
            .collect()
    }

    /// `query` must already be lowercase
    fn matches_lowered(&self, book: &Book, query: &str) -> bool {
        match self {
            Self::Title => book.title.to_lowercase().contains(query),
            Self::Author => book.author.to_lowercase().contains(query),
            Self::Year => book.year.to_string() == query,
        }
    }
}

impl FromStr for SearchCriteria {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(ShelfError::InvalidCriteria(s.to_string())),
        }
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
