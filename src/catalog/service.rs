//! Catalog service
//!
//! Coordinates operations over the book store.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::model::{next_id, Book, BookStatus, NewBook};
use crate::ops::{Command, Outcome};
use crate::storage::BookStore;

use super::SearchCriteria;

/// The library catalog
///
/// Every operation follows the same cycle:
/// load collection → compute → save (mutations only, and only on a hit).
/// A failed load aborts before anything is written, so a corrupt file is
/// never overwritten.
pub struct Catalog {
    /// Catalog configuration
    config: Config,

    /// Load/save boundary to the catalog file
    store: BookStore,
}

impl Catalog {
    /// Open a catalog with the given config
    ///
    /// Validates the config; the file itself is not touched until the
    /// first operation.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let store = BookStore::from_config(&config);
        tracing::debug!(
            path = %store.path().display(),
            exists = store.exists(),
            "Catalog opened"
        );

        Ok(Self { config, store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified catalog file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        let kind = command.command_type();
        let _span = tracing::debug_span!(
            "command",
            kind = kind.as_str(),
            mutation = kind.is_mutation()
        )
        .entered();

        match command {
            Command::Add { book } => self.add_book(book).map(Outcome::Added),
            Command::Delete { id } => Ok(self
                .delete_book(id)?
                .map_or(Outcome::NotFound { id }, Outcome::Deleted)),
            Command::Search { criteria, query } => {
                self.search(criteria, &query).map(Outcome::Found)
            }
            Command::List => self.list_books().map(Outcome::Listed),
            Command::UpdateStatus { id, status } => Ok(self
                .update_status(id, status)?
                .map_or(Outcome::NotFound { id }, Outcome::StatusUpdated)),
        }
    }

    /// Add a book
    ///
    /// Assigns `max(id) + 1` over the stored collection and the default
    /// status, appends, and saves.
    pub fn add_book(&self, new_book: NewBook) -> Result<Book> {
        let mut books = self.store.load()?;

        let book = new_book.into_book(next_id(&books)?);
        books.push(book.clone());
        self.store.save(&books)?;

        tracing::info!(id = book.id, title = %book.title, "Book added");
        Ok(book)
    }

    /// Delete a book by id
    ///
    /// Returns:
    /// - `Ok(Some(book))`: removed and saved
    /// - `Ok(None)`: no such id, nothing saved
    pub fn delete_book(&self, id: u64) -> Result<Option<Book>> {
        let mut books = self.store.load()?;

        let Some(pos) = books.iter().position(|b| b.id == id) else {
            tracing::debug!(id, "Delete: book not found");
            return Ok(None);
        };

        let removed = books.remove(pos);
        self.store.save(&books)?;

        tracing::info!(id, title = %removed.title, "Book deleted");
        Ok(Some(removed))
    }

    /// Search books by one field (read-only)
    ///
    /// Results keep collection order.
    pub fn search(&self, criteria: SearchCriteria, query: &str) -> Result<Vec<Book>> {
        let books = self.store.load()?;
        let found = criteria.filter(books, query);

        tracing::debug!(criteria = criteria.as_str(), query, hits = found.len(), "Search");
        Ok(found)
    }

    /// All books in collection order (read-only)
    pub fn list_books(&self) -> Result<Vec<Book>> {
        self.store.load()
    }

    /// Overwrite a book's status
    ///
    /// Returns:
    /// - `Ok(Some(book))`: the updated record, saved
    /// - `Ok(None)`: no such id, nothing saved
    pub fn update_status(&self, id: u64, status: BookStatus) -> Result<Option<Book>> {
        let mut books = self.store.load()?;

        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            tracing::debug!(id, "Update status: book not found");
            return Ok(None);
        };

        let previous = book.status;
        book.status = status;
        let updated = book.clone();
        self.store.save(&books)?;

        tracing::info!(id, from = %previous, to = %status, "Book status updated");
        Ok(Some(updated))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Get the catalog file path
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
