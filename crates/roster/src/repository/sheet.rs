use std::marker::PhantomData;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::Serialize;
use tokio::sync::Mutex;

use roster_core::records::{id_matches, next_record_id, SheetRecord};
use roster_core::storage::{is_blank, Result, Row, TabularStore};

/// Receipt for a successful add: the id the repository assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddReceipt {
    pub id: u64,
}

/// Outcome of a delete.
///
/// A miss is a structured payload, not a failure: the dispatcher wraps it in
/// the success envelope exactly like any other result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound { entity: &'static str },
}

impl Serialize for DeleteOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            DeleteOutcome::Deleted => map.serialize_entry("success", &true)?,
            DeleteOutcome::NotFound { entity } => {
                map.serialize_entry("error", &format!("{entity} not found"))?;
            }
        }
        map.end()
    }
}

/// Repository shared by every id-keyed collection.
///
/// The record type supplies the sheet layout and row mapping; the
/// list/add/delete semantics are identical across collections. The sheet is
/// created lazily with its header row on first access.
pub struct SheetRepository<R: SheetRecord> {
    store: Arc<dyn TabularStore>,
    /// Serializes mutations per sheet so id computation and the following
    /// append are observed atomically by concurrent callers.
    write_lock: Arc<Mutex<()>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: SheetRecord> Clone for SheetRepository<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
            _record: PhantomData,
        }
    }
}

impl<R: SheetRecord> SheetRepository<R> {
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            _record: PhantomData,
        }
    }

    /// Reads the sheet's data rows, creating the sheet on first access.
    async fn data_rows(&self) -> Result<Vec<Row>> {
        self.store.open_or_create(R::SHEET).await?;
        let mut rows = self.store.read_all(R::SHEET.name).await?;
        if !rows.is_empty() {
            rows.remove(0); // header
        }
        Ok(rows)
    }

    /// All records in physical row order. Only rows whose id cell is blank
    /// are skipped; any other id surfaces verbatim, numeric or not.
    pub async fn list(&self) -> Result<Vec<R>> {
        let rows = self.data_rows().await?;
        Ok(rows
            .iter()
            .filter(|row| row.first().is_some_and(|cell| !is_blank(cell)))
            .map(|row| R::from_row(row))
            .collect())
    }

    /// Assigns the next free id, appends the full row and returns the id.
    pub async fn add(&self, draft: R::Draft) -> Result<AddReceipt> {
        let _guard = self.write_lock.lock().await;

        let rows = self.data_rows().await?;
        let id = next_record_id(rows.iter().filter_map(|row| row.first()));
        self.store
            .append_row(R::SHEET.name, R::new_row(id, draft))
            .await?;

        tracing::debug!(sheet = R::SHEET.name, id, "appended record");
        Ok(AddReceipt { id })
    }

    /// Deletes the first row whose id cell matches `id` (loose equality:
    /// `"3"` matches a stored `3`). At most one row is removed even when
    /// duplicate ids exist.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let _guard = self.write_lock.lock().await;

        let rows = self.data_rows().await?;
        for (index, row) in rows.iter().enumerate() {
            let Some(cell) = row.first() else { continue };
            if !id_matches(cell, id) {
                continue;
            }
            // Physical rows are 1-based and the header is row 1.
            self.store.delete_row(R::SHEET.name, index + 2).await?;
            tracing::debug!(sheet = R::SHEET.name, id, "deleted record");
            return Ok(DeleteOutcome::Deleted);
        }

        Ok(DeleteOutcome::NotFound { entity: R::ENTITY })
    }
}
