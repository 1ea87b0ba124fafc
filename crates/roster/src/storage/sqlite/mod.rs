//! SQLite workbook backend.
//!
//! Persists sheets in a generic pair of tables using `rusqlite` for
//! synchronous operations and `tokio-rusqlite` for async wrapping. Cell
//! rows are stored as JSON arrays so spreadsheet-style heterogenous cells
//! survive a round-trip.

mod error;
mod schema;
mod store;

pub use store::SqliteWorkbook;
