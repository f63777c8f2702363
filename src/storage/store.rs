//! Book Store
//!
//! Load/save boundary to the catalog file.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::model::{next_id, Book};

/// File-backed store for the book collection
///
/// Holds no file handle between calls: every `load` and `save` opens,
/// fully reads or writes, and closes the file.
#[derive(Debug, Clone)]
pub struct BookStore {
    /// Catalog file path
    path: PathBuf,

    /// Spaces per indentation level
    indent: usize,
}

impl BookStore {
    /// Create a store for the given file with default indentation
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: Config::default().indent,
        }
    }

    /// Create a store from a config
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.data_file.clone(),
            indent: config.indent,
        }
    }

    /// Load the full collection
    ///
    /// Returns:
    /// - `Ok(vec![])` if the file does not exist
    /// - `Err(CorruptData)` if the file is not a valid record array, or
    ///   holds a zero or duplicate id
    pub fn load(&self) -> Result<Vec<Book>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No catalog file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(|e| self.corrupt(e.to_string()))?;

        self.check_ids(&books)?;

        tracing::debug!(path = %self.path.display(), count = books.len(), "Loaded catalog");
        Ok(books)
    }

    /// Overwrite the file with the given collection
    ///
    /// Creates missing parent directories first.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        let indent = " ".repeat(self.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        books
            .serialize(&mut serializer)
            .map_err(|e| ShelfError::Serialization(e.to_string()))?;

        writer.flush()?;

        tracing::debug!(path = %self.path.display(), count = books.len(), "Saved catalog");
        Ok(())
    }

    /// Next id for a new book, rescanned from disk
    ///
    /// `max(existing ids) + 1`, or 1 when the collection is empty or absent.
    /// Not safe against concurrent writers.
    pub fn generate_id(&self) -> Result<u64> {
        next_id(&self.load()?)
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the catalog file exists yet
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Ids must be positive and unique
    fn check_ids(&self, books: &[Book]) -> Result<()> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in books {
            if book.id == 0 {
                return Err(self.corrupt("record with id 0".to_string()));
            }
            if !seen.insert(book.id) {
                return Err(self.corrupt(format!("duplicate id {}", book.id)));
            }
        }
        Ok(())
    }

    fn corrupt(&self, reason: String) -> ShelfError {
        ShelfError::CorruptData {
            path: self.path.clone(),
            reason,
        }
    }
}
