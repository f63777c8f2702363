//! Operations Module
//!
//! The five catalog use cases as plain data, plus parsing of the raw text
//! the operator types for them.
//!
//! ## Commands
//! - ADD            - title, author, year
//! - DELETE         - book id
//! - SEARCH         - criteria (title | author | year), query
//! - LIST           - no input
//! - UPDATE_STATUS  - book id, status (available | issued)
//!
//! ## Outcomes
//! - ADDED / DELETED / STATUS_UPDATED  - the affected record
//! - NOT_FOUND                         - no record with the given id
//! - FOUND / LISTED                    - records in collection order

mod command;
mod outcome;
mod input;

pub use command::{Command, CommandType};
pub use outcome::Outcome;
pub use input::{parse_id, parse_year};
