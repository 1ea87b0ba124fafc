use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{cell_text, Row, SheetSpec};

use super::{id_cell, SheetRecord};

/// One mentoring session log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentoringLog {
    pub id: Value,
    /// Member the session was held with. Not checked against the members
    /// sheet.
    pub member_id: String,
    pub date: String,
    pub mentor: String,
    /// Session format or category.
    #[serde(rename = "type")]
    pub kind: String,
    pub note: String,
}

/// Payload for `addMentoring`.
///
/// `memberId` is kept as an opaque JSON value so a numeric id written by a
/// client stays numeric in the sheet.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMentoringLog {
    #[serde(default)]
    pub member_id: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mentor: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl SheetRecord for MentoringLog {
    type Draft = NewMentoringLog;

    const SHEET: SheetSpec = SheetSpec {
        name: "mentoring",
        header: &["ID", "Member ID", "Date", "Mentor", "Format", "Note"],
    };

    const ENTITY: &'static str = "mentoring log";

    fn from_row(row: &[Value]) -> Self {
        Self {
            id: id_cell(row),
            member_id: cell_text(row, 1),
            date: cell_text(row, 2),
            mentor: cell_text(row, 3),
            kind: cell_text(row, 4),
            note: cell_text(row, 5),
        }
    }

    fn new_row(id: u64, draft: NewMentoringLog) -> Row {
        vec![
            Value::from(id),
            draft.member_id.unwrap_or(Value::Null),
            Value::from(draft.date.unwrap_or_default()),
            Value::from(draft.mentor.unwrap_or_default()),
            Value::from(draft.kind.unwrap_or_default()),
            Value::from(draft.note.unwrap_or_default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_row_normalizes_member_id_to_text() {
        let row = vec![json!(2), json!(7), json!("2026-05-10"), json!("Suzuki")];
        let log = MentoringLog::from_row(&row);

        assert_eq!(log.member_id, "7");
        assert_eq!(log.mentor, "Suzuki");
        assert_eq!(log.note, "");
    }

    #[test]
    fn test_new_row_keeps_numeric_member_id() {
        let draft: NewMentoringLog = serde_json::from_value(json!({
            "memberId": 7,
            "type": "online"
        }))
        .unwrap();
        let row = MentoringLog::new_row(1, draft);

        assert_eq!(row[1], json!(7));
        assert_eq!(row[4], json!("online"));
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let log = MentoringLog::from_row(&[json!(1), json!(2), json!(""), json!(""), json!("on-site")]);
        let value = serde_json::to_value(&log).unwrap();

        assert_eq!(value["type"], json!("on-site"));
        assert!(value.get("kind").is_none());
    }
}
