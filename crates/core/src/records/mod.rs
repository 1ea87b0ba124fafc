//! Record collections and their sheet mappings.
//!
//! Each collection maps one sheet row per record. The id-keyed collections
//! (members, mentoring logs, pitch teams) implement [`SheetRecord`];
//! attendance is id-less and has its own flat-to-nested mapping in
//! [`attendance`].

mod attendance;
mod id;
mod member;
mod mentoring;
mod pitch;

pub use attendance::{book_to_rows, rows_to_book, AttendanceBook, ATTENDANCE_SHEET};
pub use id::{id_matches, next_record_id, numeric_id};
pub use member::{Member, NewMember, DEFAULT_ROLE};
pub use mentoring::{MentoringLog, NewMentoringLog};
pub use pitch::{NewPitchTeam, PitchTeam, DEFAULT_TIB};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::storage::{Row, SheetSpec};

/// A record collection stored one record per sheet row, with a generated
/// numeric id in the first column. Pre-existing rows may carry ids in other
/// shapes; reads surface those cells as-is.
pub trait SheetRecord: Serialize + Sized + Send + Sync + 'static {
    /// Payload accepted by `add`: the record's fields minus the id.
    type Draft: DeserializeOwned + Send + 'static;

    /// Sheet name and fixed header row.
    const SHEET: SheetSpec;

    /// Human-readable entity label, used in not-found messages.
    const ENTITY: &'static str;

    /// Maps a data row to a record. The id cell is carried verbatim; blank
    /// or missing cells read as the collection's documented defaults, never
    /// an error.
    fn from_row(row: &[Value]) -> Self;

    /// Builds the full row for a fresh record, filling defaults for fields
    /// the draft omitted.
    fn new_row(id: u64, draft: Self::Draft) -> Row;
}

/// Today's date as an ISO `YYYY-MM-DD` string, the default for `createdAt`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// The id cell of a data row, exactly as stored.
fn id_cell(row: &[Value]) -> Value {
    row.first().cloned().unwrap_or(Value::Null)
}

/// `or`-style defaulting: an omitted or blank draft value falls back to the
/// collection default.
fn text_or_else(value: Option<String>, default: impl FnOnce() -> String) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }

    #[test]
    fn test_text_or_else_prefers_non_blank_values() {
        assert_eq!(
            text_or_else(Some("set".to_string()), || "default".to_string()),
            "set"
        );
        assert_eq!(
            text_or_else(Some("  ".to_string()), || "default".to_string()),
            "default"
        );
        assert_eq!(text_or_else(None, || "default".to_string()), "default");
    }
}
