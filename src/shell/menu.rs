//! Menu definitions

use crate::ops::CommandType;

/// Menu text shown before every choice
pub const MENU: &str = "\n\
Library Catalog\n\
1. Add book\n\
2. Delete book\n\
3. Search books\n\
4. List all books\n\
5. Update book status\n\
6. Exit";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    DeleteBook,
    SearchBooks,
    ListBooks,
    UpdateStatus,
    Exit,
}

impl MenuChoice {
    /// Exact match against "1".."6"; no trimming
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::DeleteBook),
            "3" => Some(Self::SearchBooks),
            "4" => Some(Self::ListBooks),
            "5" => Some(Self::UpdateStatus),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The command this choice runs, or `None` for exit
    pub fn command_type(&self) -> Option<CommandType> {
        match self {
            Self::AddBook => Some(CommandType::Add),
            Self::DeleteBook => Some(CommandType::Delete),
            Self::SearchBooks => Some(CommandType::Search),
            Self::ListBooks => Some(CommandType::List),
            Self::UpdateStatus => Some(CommandType::UpdateStatus),
            Self::Exit => None,
        }
    }
}
