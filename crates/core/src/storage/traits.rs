use async_trait::async_trait;

use super::{Result, Row, SheetSpec};

/// Row-level access to a workbook of named sheets.
///
/// The header row is owned by the store: [`open_or_create`] writes it when
/// the sheet does not exist yet, and [`read_all`] returns it as row 0. Row
/// numbers are 1-based with the header as row 1, matching how spreadsheets
/// address physical rows.
///
/// [`open_or_create`]: TabularStore::open_or_create
/// [`read_all`]: TabularStore::read_all
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Ensures the sheet exists, creating it with its header row if absent.
    async fn open_or_create(&self, spec: SheetSpec) -> Result<()>;

    /// Reads every physical row, header included as element 0.
    async fn read_all(&self, sheet: &str) -> Result<Vec<Row>>;

    /// Appends a row after the last occupied row.
    async fn append_row(&self, sheet: &str, row: Row) -> Result<()>;

    /// Removes exactly one physical row (1-based, header = row 1).
    async fn delete_row(&self, sheet: &str, row_number: usize) -> Result<()>;

    /// Clears all rows after the header and writes `rows` contiguously
    /// starting at row 2.
    async fn replace_data_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<()>;
}
