//! In-memory workbook backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::storage::{Result, Row, SheetSpec, StoreError, TabularStore};

#[derive(Debug, Default)]
struct Sheet {
    header: Row,
    rows: Vec<Row>,
}

/// In-memory workbook for development and tests.
///
/// Sheets live in a HashMap behind an async RwLock. Data is not persisted
/// and will be lost when the workbook is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: Arc<RwLock<HashMap<String, Sheet>>>,
}

impl InMemoryWorkbook {
    /// Creates a new empty workbook.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TabularStore for InMemoryWorkbook {
    async fn open_or_create(&self, spec: SheetSpec) -> Result<()> {
        let mut sheets = self.sheets.write().await;
        sheets.entry(spec.name.to_string()).or_insert_with(|| Sheet {
            header: spec.header_row(),
            rows: Vec::new(),
        });
        Ok(())
    }

    async fn read_all(&self, sheet: &str) -> Result<Vec<Row>> {
        let sheets = self.sheets.read().await;
        let data = sheets
            .get(sheet)
            .ok_or_else(|| StoreError::NoSuchSheet(sheet.to_string()))?;

        let mut rows = Vec::with_capacity(data.rows.len() + 1);
        rows.push(data.header.clone());
        rows.extend(data.rows.iter().cloned());
        Ok(rows)
    }

    async fn append_row(&self, sheet: &str, row: Row) -> Result<()> {
        let mut sheets = self.sheets.write().await;
        let data = sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::NoSuchSheet(sheet.to_string()))?;

        data.rows.push(row);
        Ok(())
    }

    async fn delete_row(&self, sheet: &str, row_number: usize) -> Result<()> {
        let mut sheets = self.sheets.write().await;
        let data = sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::NoSuchSheet(sheet.to_string()))?;

        // Row 1 is the header; data rows start at row 2.
        let index = row_number.checked_sub(2).ok_or(StoreError::RowOutOfRange {
            sheet: sheet.to_string(),
            row: row_number,
        })?;
        if index >= data.rows.len() {
            return Err(StoreError::RowOutOfRange {
                sheet: sheet.to_string(),
                row: row_number,
            });
        }

        data.rows.remove(index);
        Ok(())
    }

    async fn replace_data_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<()> {
        let mut sheets = self.sheets.write().await;
        let data = sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::NoSuchSheet(sheet.to_string()))?;

        data.rows = rows;
        Ok(())
    }
}
