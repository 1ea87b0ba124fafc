use std::collections::BTreeMap;

use serde_json::Value;

use crate::storage::{cell_text, Row, SheetSpec};

/// Sheet layout for the flat `(month, memberId, present)` triples.
pub const ATTENDANCE_SHEET: SheetSpec = SheetSpec {
    name: "attendance",
    header: &["Month", "Member ID", "Present"],
};

/// External shape of the attendance data: `month → memberId → present`.
///
/// `month` is a `YYYY-MM` string, member ids are object keys (always text in
/// JSON) and `present` is kept as an opaque value exactly as the client sent
/// it.
pub type AttendanceBook = BTreeMap<String, BTreeMap<String, Value>>;

/// Folds flat data rows into the nested book. Later rows for the same
/// `(month, memberId)` pair overwrite earlier ones.
pub fn rows_to_book<'a>(rows: impl Iterator<Item = &'a Row>) -> AttendanceBook {
    let mut book = AttendanceBook::new();
    for row in rows {
        let month = cell_text(row, 0);
        let member = cell_text(row, 1);
        let present = row.get(2).cloned().unwrap_or(Value::Null);
        book.entry(month).or_default().insert(member, present);
    }
    book
}

/// Flattens the nested book back into data rows, one per pair.
pub fn book_to_rows(book: &AttendanceBook) -> Vec<Row> {
    let mut rows = Vec::new();
    for (month, members) in book {
        for (member, present) in members {
            rows.push(vec![
                Value::from(month.as_str()),
                Value::from(member.as_str()),
                present.clone(),
            ]);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_fold_into_nested_book() {
        let rows = vec![
            vec![json!("2026-04"), json!(1), json!(true)],
            vec![json!("2026-04"), json!(2), json!(false)],
            vec![json!("2026-05"), json!(1), json!(true)],
        ];
        let book = rows_to_book(rows.iter());

        assert_eq!(book["2026-04"]["1"], json!(true));
        assert_eq!(book["2026-04"]["2"], json!(false));
        assert_eq!(book["2026-05"]["1"], json!(true));
    }

    #[test]
    fn test_later_rows_win_for_the_same_pair() {
        let rows = vec![
            vec![json!("2026-04"), json!(1), json!(false)],
            vec![json!("2026-04"), json!(1), json!(true)],
        ];
        let book = rows_to_book(rows.iter());

        assert_eq!(book["2026-04"].len(), 1);
        assert_eq!(book["2026-04"]["1"], json!(true));
    }

    #[test]
    fn test_numeric_member_ids_become_text_keys() {
        let rows = vec![vec![json!("2026-04"), json!(7), json!(true)]];
        let book = rows_to_book(rows.iter());

        assert!(book["2026-04"].contains_key("7"));
    }

    #[test]
    fn test_book_to_rows_emits_one_row_per_pair() {
        let mut book = AttendanceBook::new();
        book.entry("2026-04".to_string())
            .or_default()
            .insert("1".to_string(), json!(true));
        book.entry("2026-04".to_string())
            .or_default()
            .insert("2".to_string(), json!("late"));

        let rows = book_to_rows(&book);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![json!("2026-04"), json!("1"), json!(true)]);
        assert_eq!(rows[1], vec![json!("2026-04"), json!("2"), json!("late")]);
    }

    #[test]
    fn test_short_rows_read_as_blank_cells() {
        let rows = vec![vec![json!("2026-04")]];
        let book = rows_to_book(rows.iter());

        assert_eq!(book["2026-04"][""], Value::Null);
    }
}
