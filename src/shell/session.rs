//! Console Session
//!
//! Runs the menu loop for one operator.

use std::io::{BufRead, Write};

use crate::catalog::{Catalog, SearchCriteria};
use crate::error::{Result, ShelfError};
use crate::model::{BookStatus, NewBook};
use crate::ops::{parse_id, parse_year, Command, CommandType, Outcome};

use super::{MenuChoice, MENU};

/// An interactive session over a line reader and a writer
///
/// Operation errors are reported and the menu comes back; only console
/// I/O failures end `run` with an error.
pub struct Session<'a, R, W> {
    /// Catalog the commands run against
    catalog: &'a Catalog,

    /// Operator input, one line per answer
    input: R,

    /// Menu, prompts and reports
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run the menu loop until exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(path = %self.catalog.data_file().display(), "Session started");

        loop {
            writeln!(self.output, "{}", MENU)?;

            let line = match self.prompt("Enter your choice: ") {
                Ok(line) => line,
                Err(ShelfError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            let Some(kind) = choice.command_type() else {
                break;
            };

            match self.handle(kind) {
                Ok(outcome) => {
                    tracing::debug!(
                        command = kind.as_str(),
                        records = outcome.books().len(),
                        "Command completed"
                    );
                    writeln!(self.output, "{}", outcome)?;
                }
                Err(ShelfError::InputClosed) => break,
                Err(e) => {
                    if e.is_user_error() {
                        tracing::debug!(command = kind.as_str(), error = %e, "Rejected input");
                    } else {
                        tracing::warn!(command = kind.as_str(), error = %e, "Operation failed");
                    }
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        self.output.flush()?;
        tracing::debug!("Session ended");
        Ok(())
    }

    /// Collect input for one command and execute it
    fn handle(&mut self, kind: CommandType) -> Result<Outcome> {
        let command = self.read_command(kind)?;
        self.catalog.execute(command)
    }

    /// Prompt for a command's fields, validating each as soon as it is read
    fn read_command(&mut self, kind: CommandType) -> Result<Command> {
        let command = match kind {
            CommandType::Add => {
                let title = self.prompt("Enter book title: ")?;
                let author = self.prompt("Enter book author: ")?;
                let year = parse_year(&self.prompt("Enter publication year: ")?)?;
                Command::Add {
                    book: NewBook::new(&title, &author, year)?,
                }
            }
            CommandType::Delete => Command::Delete {
                id: parse_id(&self.prompt("Enter ID of the book to delete: ")?)?,
            },
            CommandType::Search => {
                let criteria: SearchCriteria =
                    self.prompt("Search by title, author or year: ")?.parse()?;
                let query = self.prompt(&format!("Enter {}: ", criteria))?;
                Command::Search { criteria, query }
            }
            CommandType::List => Command::List,
            CommandType::UpdateStatus => {
                let id = parse_id(&self.prompt("Enter ID of the book to update: ")?)?;
                let status: BookStatus =
                    self.prompt("Enter new status (available/issued): ")?.parse()?;
                Command::UpdateStatus { id, status }
            }
        };
        Ok(command)
    }

    /// Write a prompt and read one line, without its line terminator
    ///
    /// Invalid UTF-8 is decoded lossily so it reaches validation as text.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ShelfError::InputClosed);
        }

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
