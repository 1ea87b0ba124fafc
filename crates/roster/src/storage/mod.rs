//! Tabular store backends.
//!
//! Concrete implementations of the [`roster_core::storage::TabularStore`]
//! trait, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): hash-map workbook for development and tests
//! - `sqlite`: persistent workbook using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite'. \
    Example: cargo build -p roster --no-default-features --features sqlite"
);

#[cfg(feature = "inmemory")]
mod inmemory;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryWorkbook;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWorkbook;
