//! Tests for Catalog
//!
//! These tests verify:
//! - Add/delete/search/list/update-status operations
//! - Command execution and reported outcomes
//! - Saves happen only for mutations that hit a record
//! - Corrupt files are reported and never overwritten
//! - Config validation on open

use std::fs;

use shelfdb::catalog::SearchCriteria;
use shelfdb::model::{Book, BookStatus, NewBook};
use shelfdb::ops::{Command, CommandType, Outcome};
use shelfdb::{Catalog, Config, ShelfError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::open_path(&temp_dir.path().join("books.json")).unwrap();
    (temp_dir, catalog)
}

fn add(catalog: &Catalog, title: &str, author: &str, year: i32) -> Book {
    catalog
        .add_book(NewBook::new(title, author, year).unwrap())
        .unwrap()
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

fn setup_search_catalog() -> (TempDir, Catalog) {
    let (temp, catalog) = setup_temp_catalog();
    add(&catalog, "The Lord of the Rings", "Tolkien", 1954);
    add(&catalog, "Dune", "Herbert", 1965);
    add(&catalog, "Overlord", "Tolkien Estate", 2001);
    add(&catalog, "Space Odyssey", "Clarke", 12001);
    add(&catalog, "Children of Dune", "Frank Herbert", 200);
    (temp, catalog)
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_first_book_gets_id_one() {
    let (_temp, catalog) = setup_temp_catalog();

    let book = add(&catalog, "Dune", "Herbert", 1965);

    assert_eq!(book.id, 1);
    assert_eq!(book.status, BookStatus::Available);
    assert_eq!(catalog.list_books().unwrap(), vec![book]);
}

#[test]
fn test_add_assigns_max_plus_one() {
    let (_temp, catalog) = setup_temp_catalog();

    assert_eq!(add(&catalog, "A", "X", 1).id, 1);
    assert_eq!(add(&catalog, "B", "X", 2).id, 2);
    assert_eq!(add(&catalog, "C", "X", 3).id, 3);
}

#[test]
fn test_add_after_deleting_highest_reuses_id() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "A", "X", 1);
    add(&catalog, "B", "X", 2);
    add(&catalog, "C", "X", 3);

    catalog.delete_book(3).unwrap();

    assert_eq!(add(&catalog, "D", "X", 4).id, 3);
}

#[test]
fn test_add_after_deleting_lower_keeps_counting() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "A", "X", 1);
    add(&catalog, "B", "X", 2);

    catalog.delete_book(1).unwrap();

    assert_eq!(add(&catalog, "C", "X", 3).id, 3);
}

#[test]
fn test_add_persists_to_file() {
    let (temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    let reopened = Catalog::open_path(&temp.path().join("books.json")).unwrap();
    let books = reopened.list_books().unwrap();

    assert_eq!(titles(&books), vec!["Dune"]);
}

#[test]
fn test_add_with_id_space_exhausted_leaves_file_untouched() {
    let (_temp, catalog) = setup_temp_catalog();
    let last = NewBook::new("Dune", "Herbert", 1965).unwrap().into_book(u64::MAX);
    catalog.store().save(&[last]).unwrap();
    let before = fs::read(catalog.data_file()).unwrap();

    let result = catalog.add_book(NewBook::new("Foundation", "Asimov", 1951).unwrap());

    assert!(matches!(result, Err(ShelfError::IdSpaceExhausted(max)) if max == u64::MAX));
    assert_eq!(fs::read(catalog.data_file()).unwrap(), before);
    assert_eq!(catalog.list_books().unwrap().len(), 1);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_only_that_book() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);
    add(&catalog, "Foundation", "Asimov", 1951);
    add(&catalog, "Solaris", "Lem", 1961);

    let removed = catalog.delete_book(2).unwrap().unwrap();

    assert_eq!(removed.title, "Foundation");
    assert_eq!(titles(&catalog.list_books().unwrap()), vec!["Dune", "Solaris"]);
}

#[test]
fn test_delete_twice_is_safe() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);
    add(&catalog, "Foundation", "Asimov", 1951);

    assert!(catalog.delete_book(1).unwrap().is_some());
    let before = fs::read(catalog.data_file()).unwrap();

    assert!(catalog.delete_book(1).unwrap().is_none());

    assert_eq!(fs::read(catalog.data_file()).unwrap(), before);
    assert_eq!(titles(&catalog.list_books().unwrap()), vec!["Foundation"]);
}

#[test]
fn test_delete_zero_id_is_not_found() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    let outcome = catalog.execute(Command::Delete { id: 0 }).unwrap();

    assert_eq!(outcome, Outcome::NotFound { id: 0 });
    assert_eq!(catalog.list_books().unwrap().len(), 1);
}

#[test]
fn test_delete_and_update_highest_possible_id() {
    let (_temp, catalog) = setup_temp_catalog();
    let mut last = NewBook::new("Dune", "Herbert", 1965).unwrap().into_book(u64::MAX);
    catalog.store().save(std::slice::from_ref(&last)).unwrap();

    let updated = catalog.update_status(u64::MAX, BookStatus::Issued).unwrap();
    last.status = BookStatus::Issued;
    assert_eq!(updated, Some(last));

    assert!(catalog.delete_book(u64::MAX).unwrap().is_some());
    assert!(catalog.list_books().unwrap().is_empty());
}

#[test]
fn test_delete_not_found_does_not_create_file() {
    let (_temp, catalog) = setup_temp_catalog();

    assert!(catalog.delete_book(1).unwrap().is_none());
    assert!(!catalog.store().exists());
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_title_case_insensitive_substring() {
    let (_temp, catalog) = setup_search_catalog();

    let found = catalog.search(SearchCriteria::Title, "lord").unwrap();

    assert_eq!(titles(&found), vec!["The Lord of the Rings", "Overlord"]);
}

#[test]
fn test_search_title_uppercase_query() {
    let (_temp, catalog) = setup_search_catalog();

    let found = catalog.search(SearchCriteria::Title, "DUNE").unwrap();

    assert_eq!(titles(&found), vec!["Dune", "Children of Dune"]);
}

#[test]
fn test_search_author_substring() {
    let (_temp, catalog) = setup_search_catalog();

    let found = catalog.search(SearchCriteria::Author, "tolkien").unwrap();

    assert_eq!(titles(&found), vec!["The Lord of the Rings", "Overlord"]);
}

#[test]
fn test_search_year_is_exact() {
    let (_temp, catalog) = setup_search_catalog();

    let found = catalog.search(SearchCriteria::Year, "2001").unwrap();

    assert_eq!(titles(&found), vec!["Overlord"]);
}

#[test]
fn test_search_year_no_prefix_match() {
    let (_temp, catalog) = setup_search_catalog();

    let found = catalog.search(SearchCriteria::Year, "200").unwrap();

    assert_eq!(titles(&found), vec!["Children of Dune"]);
}

#[test]
fn test_search_no_matches() {
    let (_temp, catalog) = setup_search_catalog();

    assert!(catalog.search(SearchCriteria::Title, "solaris").unwrap().is_empty());
}

#[test]
fn test_search_is_read_only() {
    let (_temp, catalog) = setup_temp_catalog();

    assert!(catalog.search(SearchCriteria::Title, "x").unwrap().is_empty());
    assert!(!catalog.store().exists());
}

#[test]
fn test_search_criteria_parse() {
    assert_eq!("title".parse::<SearchCriteria>().unwrap(), SearchCriteria::Title);
    assert_eq!("Author".parse::<SearchCriteria>().unwrap(), SearchCriteria::Author);
    assert_eq!("YEAR".parse::<SearchCriteria>().unwrap(), SearchCriteria::Year);

    let err = "genre".parse::<SearchCriteria>().unwrap_err();
    assert!(matches!(err, ShelfError::InvalidCriteria(ref s) if s == "genre"));
}

#[test]
fn test_search_criteria_matches() {
    let book = NewBook::new("The Hobbit", "Tolkien", 1937).unwrap().into_book(1);

    assert!(SearchCriteria::Title.matches(&book, "HOBB"));
    assert!(SearchCriteria::Author.matches(&book, "kie"));
    assert!(SearchCriteria::Year.matches(&book, "1937"));
    assert!(!SearchCriteria::Year.matches(&book, "937"));
    assert!(!SearchCriteria::Author.matches(&book, "hobbit"));
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_list_empty_catalog() {
    let (_temp, catalog) = setup_temp_catalog();

    assert!(catalog.list_books().unwrap().is_empty());
}

#[test]
fn test_list_keeps_collection_order() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Solaris", "Lem", 1961);
    add(&catalog, "Dune", "Herbert", 1965);
    add(&catalog, "Foundation", "Asimov", 1951);

    let books = catalog.list_books().unwrap();

    assert_eq!(titles(&books), vec!["Solaris", "Dune", "Foundation"]);
}

// =============================================================================
// Update Status Tests
// =============================================================================

#[test]
fn test_update_status_changes_only_status() {
    let (_temp, catalog) = setup_temp_catalog();
    let original = add(&catalog, "Dune", "Herbert", 1965);

    let updated = catalog.update_status(1, BookStatus::Issued).unwrap().unwrap();

    assert_eq!(updated.status, BookStatus::Issued);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.author, original.author);
    assert_eq!(updated.year, original.year);
    assert_eq!(catalog.list_books().unwrap(), vec![updated]);
}

#[test]
fn test_update_status_round_trip() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    catalog.update_status(1, BookStatus::Issued).unwrap();
    catalog.update_status(1, BookStatus::Available).unwrap();

    assert_eq!(catalog.list_books().unwrap()[0].status, BookStatus::Available);
}

#[test]
fn test_update_status_not_found() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);
    let before = fs::read(catalog.data_file()).unwrap();

    assert!(catalog.update_status(42, BookStatus::Issued).unwrap().is_none());
    assert_eq!(fs::read(catalog.data_file()).unwrap(), before);
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_add() {
    let (_temp, catalog) = setup_temp_catalog();

    let outcome = catalog
        .execute(Command::Add {
            book: NewBook::new("Dune", "Herbert", 1965).unwrap(),
        })
        .unwrap();

    assert!(matches!(outcome, Outcome::Added(ref b) if b.id == 1));
    assert_eq!(outcome.to_string(), "Book 'Dune' added with ID 1.");
}

#[test]
fn test_execute_delete_and_not_found() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    let outcome = catalog.execute(Command::Delete { id: 1 }).unwrap();
    assert_eq!(outcome.to_string(), "Book with ID 1 deleted.");

    let outcome = catalog.execute(Command::Delete { id: 1 }).unwrap();
    assert_eq!(outcome, Outcome::NotFound { id: 1 });
    assert_eq!(outcome.to_string(), "Book with ID 1 not found.");
}

#[test]
fn test_execute_search_outcomes() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    let outcome = catalog
        .execute(Command::Search {
            criteria: SearchCriteria::Year,
            query: "1965".to_string(),
        })
        .unwrap();
    assert_eq!(outcome.to_string(), "[1] Dune by Herbert (1965) - available");
    assert_eq!(outcome.books().len(), 1);

    let outcome = catalog
        .execute(Command::Search {
            criteria: SearchCriteria::Title,
            query: "nothing".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Found(Vec::new()));
    assert_eq!(outcome.to_string(), "No books found.");
}

#[test]
fn test_execute_list_outcomes() {
    let (_temp, catalog) = setup_temp_catalog();

    let outcome = catalog.execute(Command::List).unwrap();
    assert_eq!(outcome.to_string(), "The catalog is empty.");

    add(&catalog, "Dune", "Herbert", 1965);
    add(&catalog, "Foundation", "Asimov", 1951);

    let outcome = catalog.execute(Command::List).unwrap();
    assert_eq!(
        outcome.to_string(),
        "[1] Dune by Herbert (1965) - available\n[2] Foundation by Asimov (1951) - available"
    );
}

#[test]
fn test_execute_update_status() {
    let (_temp, catalog) = setup_temp_catalog();
    add(&catalog, "Dune", "Herbert", 1965);

    let outcome = catalog
        .execute(Command::UpdateStatus {
            id: 1,
            status: BookStatus::Issued,
        })
        .unwrap();
    assert_eq!(outcome.to_string(), "Status of book with ID 1 updated to issued.");

    let outcome = catalog
        .execute(Command::UpdateStatus {
            id: 9,
            status: BookStatus::Issued,
        })
        .unwrap();
    assert_eq!(outcome, Outcome::NotFound { id: 9 });
}

#[test]
fn test_command_types() {
    assert_eq!(Command::List.command_type(), CommandType::List);
    assert_eq!(Command::Delete { id: 1 }.command_type(), CommandType::Delete);
    assert!(CommandType::Add.is_mutation());
    assert!(CommandType::UpdateStatus.is_mutation());
    assert!(!CommandType::Search.is_mutation());
    assert!(!CommandType::List.is_mutation());
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_corrupt_file_fails_every_operation_and_is_untouched() {
    let (_temp, catalog) = setup_temp_catalog();
    fs::write(catalog.data_file(), "{ broken").unwrap();

    let commands = vec![
        Command::Add {
            book: NewBook::new("Dune", "Herbert", 1965).unwrap(),
        },
        Command::Delete { id: 1 },
        Command::Search {
            criteria: SearchCriteria::Title,
            query: "dune".to_string(),
        },
        Command::List,
        Command::UpdateStatus {
            id: 1,
            status: BookStatus::Issued,
        },
    ];

    for command in commands {
        let result = catalog.execute(command);
        assert!(matches!(result, Err(ShelfError::CorruptData { .. })));
    }

    assert_eq!(fs::read_to_string(catalog.data_file()).unwrap(), "{ broken");
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_does_not_create_file() {
    let (_temp, catalog) = setup_temp_catalog();

    assert!(!catalog.store().exists());
    assert_eq!(catalog.config().indent, 4);
}

#[test]
fn test_open_rejects_directory_as_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_file(temp_dir.path()).build();

    assert!(matches!(Catalog::open(config), Err(ShelfError::Config(_))));
}

#[test]
fn test_open_rejects_empty_path() {
    let config = Config::builder().data_file("").build();

    assert!(matches!(Catalog::open(config), Err(ShelfError::Config(_))));
}

#[test]
fn test_open_rejects_huge_indent() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("books.json"))
        .indent(17)
        .build();

    assert!(matches!(Catalog::open(config), Err(ShelfError::Config(_))));
}
