use thiserror::Error;

/// Errors that can occur during tabular store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("sheet '{sheet}' is corrupt: {detail}")]
    Corrupt { sheet: String, detail: String },
    #[error("no such sheet: {0}")]
    NoSuchSheet(String),
    #[error("row {row} out of range for sheet '{sheet}'")]
    RowOutOfRange { sheet: String, row: usize },
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Result type for tabular store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
