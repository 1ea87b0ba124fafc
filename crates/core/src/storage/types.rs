use serde_json::Value;

/// A single physical row of a sheet.
///
/// Cells keep their spreadsheet-style heterogeneity: numbers stay numbers,
/// booleans stay booleans, text stays text.
pub type Row = Vec<Value>;

/// Static description of a sheet: its name and fixed header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSpec {
    pub name: &'static str,
    pub header: &'static [&'static str],
}

impl SheetSpec {
    /// The header as a physical row of string cells.
    pub fn header_row(&self) -> Row {
        self.header.iter().map(|h| Value::from(*h)).collect()
    }
}

/// Returns true when a cell is absent for record purposes: JSON null or an
/// empty/whitespace-only string.
pub fn is_blank(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Renders a cell the way a spreadsheet displays it: text verbatim, numbers
/// and booleans via their canonical form, null as the empty string.
pub fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Cell at `idx` as display text. Missing cells (short rows) read as the
/// empty string, never an error.
pub fn cell_text(row: &[Value], idx: usize) -> String {
    row.get(idx).map(cell_to_string).unwrap_or_default()
}

/// Like [`cell_text`] but substitutes `default` for blank or missing cells.
pub fn cell_text_or(row: &[Value], idx: usize, default: &str) -> String {
    match row.get(idx) {
        Some(cell) if !is_blank(cell) => cell_to_string(cell),
        _ => default.to_string(),
    }
}
