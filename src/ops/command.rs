//! Command definitions
//!
//! Represents validated requests from the operator.

use crate::catalog::SearchCriteria;
use crate::model::{BookStatus, NewBook};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Delete,
    Search,
    List,
    UpdateStatus,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::List => "list",
            Self::UpdateStatus => "update_status",
        }
    }

    /// Whether executing this command can rewrite the catalog file
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Add | Self::Delete | Self::UpdateStatus)
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new book
    Add { book: NewBook },

    /// Delete a book by id
    Delete { id: u64 },

    /// Search by one field
    Search { criteria: SearchCriteria, query: String },

    /// List every book
    List,

    /// Change a book's loan status
    UpdateStatus { id: u64, status: BookStatus },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Delete { .. } => CommandType::Delete,
            Command::Search { .. } => CommandType::Search,
            Command::List => CommandType::List,
            Command::UpdateStatus { .. } => CommandType::UpdateStatus,
        }
    }
}
