//! Configuration for ShelfDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, ShelfError};

/// Widest indentation accepted for the catalog file
const MAX_INDENT: usize = 16;

/// Main configuration for a ShelfDB catalog
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The catalog file. Holds the whole collection as a JSON array.
    pub data_file: PathBuf,

    /// Spaces per indentation level when pretty-printing the catalog file
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("books.json"),
            indent: 4,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config before a catalog is opened with it
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ShelfError::Config("data file path is empty".to_string()));
        }

        if self.data_file.is_dir() {
            return Err(ShelfError::Config(format!(
                "data file {} is a directory",
                self.data_file.display()
            )));
        }

        if self.indent > MAX_INDENT {
            return Err(ShelfError::Config(format!(
                "indent {} exceeds maximum of {}",
                self.indent, MAX_INDENT
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the indentation width of the catalog file
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = spaces;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
