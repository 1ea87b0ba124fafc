//! Record id generation and matching.
//!
//! Ids live in the first cell of each data row and can arrive as numbers or
//! as their string form. Matching and max-id computation normalize both
//! forms to a numeric value here instead of relying on implicit coercion;
//! the cells themselves are kept verbatim.

use serde_json::Value;

use crate::storage::{cell_to_string, is_blank};

/// Reads an id cell as a number when it has one: number cells directly,
/// string cells via parsing.
fn numeric_value(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parses an id cell as a positive integer for the max-id computation.
/// Fractional values contribute their integer part, like legacy sheets that
/// went through `parseInt`. Blank or non-numeric cells yield `None`.
pub fn numeric_id(cell: &Value) -> Option<u64> {
    let n = numeric_value(cell)?;
    (n.is_finite() && n >= 1.0).then_some(n as u64)
}

/// Next id for a column of id cells: 1 + the largest numeric id, or 1 when
/// no row carries one.
pub fn next_record_id<'a>(ids: impl Iterator<Item = &'a Value>) -> u64 {
    ids.filter_map(numeric_id).max().unwrap_or(0) + 1
}

/// Loose id equality: `"3"` matches a stored `3`. When both sides read as
/// numbers they are compared numerically, otherwise as trimmed text. Blank
/// cells never match.
pub fn id_matches(cell: &Value, wanted: &str) -> bool {
    if is_blank(cell) {
        return false;
    }
    match (numeric_value(cell), wanted.trim().parse::<f64>().ok()) {
        (Some(stored), Some(asked)) => stored == asked,
        _ => cell_to_string(cell).trim() == wanted.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_parses_numbers_and_numeric_strings() {
        assert_eq!(numeric_id(&json!(3)), Some(3));
        assert_eq!(numeric_id(&json!("7")), Some(7));
        assert_eq!(numeric_id(&json!(" 12 ")), Some(12));
    }

    #[test]
    fn test_numeric_id_truncates_fractional_cells() {
        assert_eq!(numeric_id(&json!(2.5)), Some(2));
        assert_eq!(numeric_id(&json!("2.5")), Some(2));
        assert_eq!(numeric_id(&json!(0.9)), None);
    }

    #[test]
    fn test_numeric_id_rejects_blank_and_non_numeric_cells() {
        assert_eq!(numeric_id(&Value::Null), None);
        assert_eq!(numeric_id(&json!("")), None);
        assert_eq!(numeric_id(&json!("x")), None);
        assert_eq!(numeric_id(&json!(0)), None);
        assert_eq!(numeric_id(&json!(-4)), None);
        assert_eq!(numeric_id(&json!(true)), None);
    }

    #[test]
    fn test_next_record_id_skips_non_numeric_cells() {
        let ids = [json!(2), json!("x"), json!(5)];
        assert_eq!(next_record_id(ids.iter()), 6);
    }

    #[test]
    fn test_next_record_id_counts_fractional_ids_truncated() {
        let ids = [json!(2), json!(6.5)];
        assert_eq!(next_record_id(ids.iter()), 7);
    }

    #[test]
    fn test_next_record_id_on_empty_column_is_one() {
        assert_eq!(next_record_id([].iter()), 1);
    }

    #[test]
    fn test_id_matches_across_types() {
        assert!(id_matches(&json!(3), "3"));
        assert!(id_matches(&json!("3"), "3"));
        assert!(id_matches(&json!("3"), " 3 "));
        assert!(!id_matches(&json!(3), "4"));
    }

    #[test]
    fn test_id_matches_compares_fractional_cells_numerically() {
        assert!(id_matches(&json!(2.5), "2.5"));
        assert!(!id_matches(&json!(2.5), "2"));
    }

    #[test]
    fn test_id_matches_falls_back_to_text_comparison() {
        assert!(id_matches(&json!("abc"), "abc"));
        assert!(!id_matches(&json!("abc"), "3"));
    }

    #[test]
    fn test_blank_cells_never_match() {
        assert!(!id_matches(&json!(""), ""));
        assert!(!id_matches(&Value::Null, ""));
    }
}
