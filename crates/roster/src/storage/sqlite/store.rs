//! SQLite workbook implementation.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use roster_core::storage::{Result, Row, SheetSpec, StoreError, TabularStore};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed workbook.
///
/// Each sheet is a row in the `sheets` table; data rows are JSON-encoded
/// cell arrays keyed by a contiguous 1-based position.
pub struct SqliteWorkbook {
    conn: Connection,
}

impl SqliteWorkbook {
    /// Opens a file-based workbook, creating the file and schema if absent.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory workbook. Useful for testing - data is lost when
    /// the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    fn encode_cells(row: &Row) -> Result<String> {
        serde_json::to_string(row).map_err(|e| StoreError::QueryFailed(format!("cell encoding failed: {e}")))
    }

    fn decode_cells(sheet: &str, cells: &str) -> Result<Row> {
        serde_json::from_str(cells).map_err(|e| StoreError::Corrupt {
            sheet: sheet.to_string(),
            detail: format!("row is not a JSON cell array: {e}"),
        })
    }
}

#[async_trait]
impl TabularStore for SqliteWorkbook {
    async fn open_or_create(&self, spec: SheetSpec) -> Result<()> {
        let name = spec.name.to_string();
        let header = Self::encode_cells(&spec.header_row())?;

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_SHEET, rusqlite::params![name, header])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn read_all(&self, sheet: &str) -> Result<Vec<Row>> {
        let name = sheet.to_string();

        let (header, data) = self
            .conn
            .call(move |conn| {
                let header: Option<String> = conn
                    .query_row(schema::SELECT_HEADER, [&name], |row| row.get(0))
                    .optional()
                    .map_err(wrap_err)?;

                let mut stmt = conn.prepare(schema::SELECT_ROWS).map_err(wrap_err)?;
                let cells = stmt
                    .query_map([&name], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)?;

                let mut data = Vec::new();
                for row_result in cells {
                    data.push(row_result.map_err(wrap_err)?);
                }
                Ok((header, data))
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        let header = header.ok_or_else(|| StoreError::NoSuchSheet(sheet.to_string()))?;

        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(Self::decode_cells(sheet, &header)?);
        for cells in &data {
            rows.push(Self::decode_cells(sheet, cells)?);
        }
        Ok(rows)
    }

    async fn append_row(&self, sheet: &str, row: Row) -> Result<()> {
        let name = sheet.to_string();
        let cells = Self::encode_cells(&row)?;

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let position: i64 = tx
                    .query_row(schema::NEXT_POSITION, [&name], |row| row.get(0))
                    .map_err(wrap_err)?;
                tx.execute(schema::INSERT_ROW, rusqlite::params![name, position, cells])
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_row(&self, sheet: &str, row_number: usize) -> Result<()> {
        // Row 1 is the header; data row n lives at position n - 1.
        let position = match row_number.checked_sub(1) {
            Some(p) if p >= 1 => p as i64,
            _ => {
                return Err(StoreError::RowOutOfRange {
                    sheet: sheet.to_string(),
                    row: row_number,
                })
            }
        };
        let name = sheet.to_string();

        let deleted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let deleted = tx
                    .execute(schema::DELETE_ROW_AT, rusqlite::params![name, position])
                    .map_err(wrap_err)?;
                if deleted > 0 {
                    tx.execute(schema::SHIFT_ROWS_AFTER, rusqlite::params![name, position])
                        .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(deleted)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        if deleted == 0 {
            return Err(StoreError::RowOutOfRange {
                sheet: sheet.to_string(),
                row: row_number,
            });
        }
        Ok(())
    }

    async fn replace_data_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<()> {
        let name = sheet.to_string();
        let encoded = rows
            .iter()
            .map(Self::encode_cells)
            .collect::<Result<Vec<String>>>()?;

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::CLEAR_ROWS, [&name]).map_err(wrap_err)?;
                for (index, cells) in encoded.iter().enumerate() {
                    tx.execute(
                        schema::INSERT_ROW,
                        rusqlite::params![name, (index + 1) as i64, cells],
                    )
                    .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
