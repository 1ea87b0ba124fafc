use std::sync::Arc;

use tokio::sync::Mutex;

use roster_core::records::{book_to_rows, rows_to_book, AttendanceBook, ATTENDANCE_SHEET};
use roster_core::storage::{Result, TabularStore};

/// Repository for the id-less attendance sheet.
///
/// Attendance has no per-record id and no delete; the only write path is a
/// full destructive replace of the data rows with the given snapshot.
#[derive(Clone)]
pub struct AttendanceRepository {
    store: Arc<dyn TabularStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AttendanceRepository {
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The nested `month → memberId → present` mapping. Later rows for the
    /// same pair overwrite earlier ones during the fold.
    pub async fn get_all(&self) -> Result<AttendanceBook> {
        self.store.open_or_create(ATTENDANCE_SHEET).await?;
        let rows = self.store.read_all(ATTENDANCE_SHEET.name).await?;
        Ok(rows_to_book(rows.iter().skip(1)))
    }

    /// Replaces the entire sheet with the given snapshot. No merge: months
    /// absent from `book` are gone afterwards.
    pub async fn save_all(&self, book: &AttendanceBook) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        self.store.open_or_create(ATTENDANCE_SHEET).await?;
        self.store
            .replace_data_rows(ATTENDANCE_SHEET.name, book_to_rows(book))
            .await?;

        tracing::debug!(months = book.len(), "replaced attendance sheet");
        Ok(())
    }
}
