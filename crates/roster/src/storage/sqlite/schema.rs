//! SQL statements for the SQLite workbook. Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `sheet_rows.position` is 1-based per sheet and kept contiguous by the
/// delete/replace operations, so physical row order survives restarts.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS sheets (
    name TEXT PRIMARY KEY,
    header TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sheet_rows (
    sheet TEXT NOT NULL REFERENCES sheets(name) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    cells TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet_position
    ON sheet_rows(sheet, position);
"#;

pub const INSERT_SHEET: &str = r#"
INSERT OR IGNORE INTO sheets (name, header) VALUES (?1, ?2)
"#;

pub const SELECT_HEADER: &str = r#"
SELECT header FROM sheets WHERE name = ?1
"#;

pub const SELECT_ROWS: &str = r#"
SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY position
"#;

pub const NEXT_POSITION: &str = r#"
SELECT COALESCE(MAX(position), 0) + 1 FROM sheet_rows WHERE sheet = ?1
"#;

pub const INSERT_ROW: &str = r#"
INSERT INTO sheet_rows (sheet, position, cells) VALUES (?1, ?2, ?3)
"#;

pub const DELETE_ROW_AT: &str = r#"
DELETE FROM sheet_rows WHERE sheet = ?1 AND position = ?2
"#;

pub const SHIFT_ROWS_AFTER: &str = r#"
UPDATE sheet_rows SET position = position - 1 WHERE sheet = ?1 AND position > ?2
"#;

pub const CLEAR_ROWS: &str = r#"
DELETE FROM sheet_rows WHERE sheet = ?1
"#;
