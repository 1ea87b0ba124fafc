use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{cell_text, cell_text_or, Row, SheetSpec};

use super::{id_cell, text_or_else, today, SheetRecord};

/// Role assigned when a new member does not specify one.
pub const DEFAULT_ROLE: &str = "general member";

/// A registered member of the organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The stored id cell, verbatim. Freshly added rows get a numeric id,
    /// but hand-edited sheets can carry anything non-blank here.
    pub id: Value,
    pub name: String,
    /// Phonetic reading of the name.
    pub kana: String,
    pub university: String,
    pub grade: String,
    pub role: String,
    pub interest: String,
    pub email: String,
    pub created_at: String,
}

/// Payload for `addMember`: every field optional, defaults applied on write.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kana: Option<String>,
    #[serde(default, alias = "uni")]
    pub university: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SheetRecord for Member {
    type Draft = NewMember;

    const SHEET: SheetSpec = SheetSpec {
        name: "members",
        header: &[
            "ID",
            "Name",
            "Kana",
            "University",
            "Grade",
            "Role",
            "Interest",
            "Email",
            "Created At",
        ],
    };

    const ENTITY: &'static str = "member";

    fn from_row(row: &[Value]) -> Self {
        Self {
            id: id_cell(row),
            name: cell_text(row, 1),
            kana: cell_text(row, 2),
            university: cell_text(row, 3),
            grade: cell_text(row, 4),
            role: cell_text_or(row, 5, DEFAULT_ROLE),
            interest: cell_text(row, 6),
            email: cell_text(row, 7),
            created_at: cell_text(row, 8),
        }
    }

    fn new_row(id: u64, draft: NewMember) -> Row {
        vec![
            Value::from(id),
            Value::from(draft.name.unwrap_or_default()),
            Value::from(draft.kana.unwrap_or_default()),
            Value::from(draft.university.unwrap_or_default()),
            Value::from(draft.grade.unwrap_or_default()),
            Value::from(text_or_else(draft.role, || DEFAULT_ROLE.to_string())),
            Value::from(draft.interest.unwrap_or_default()),
            Value::from(draft.email.unwrap_or_default()),
            Value::from(text_or_else(draft.created_at, today)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_row_maps_cells_to_fields() {
        let row = vec![
            json!(3),
            json!("Hanako Sato"),
            json!("さとうはなこ"),
            json!("Keio"),
            json!("B2"),
            json!("lead"),
            json!("fintech"),
            json!("hanako@example.com"),
            json!("2026-04-01"),
        ];
        let member = Member::from_row(&row);

        assert_eq!(member.id, json!(3));
        assert_eq!(member.name, "Hanako Sato");
        assert_eq!(member.university, "Keio");
        assert_eq!(member.role, "lead");
        assert_eq!(member.created_at, "2026-04-01");
    }

    #[test]
    fn test_from_row_pads_short_rows_and_defaults_role() {
        let member = Member::from_row(&[json!(1), json!("Taro")]);

        assert_eq!(member.name, "Taro");
        assert_eq!(member.kana, "");
        assert_eq!(member.role, DEFAULT_ROLE);
        assert_eq!(member.email, "");
    }

    #[test]
    fn test_from_row_keeps_non_numeric_id_verbatim() {
        let member = Member::from_row(&[json!("x"), json!("Legacy")]);

        assert_eq!(member.id, json!("x"));
        assert_eq!(member.name, "Legacy");
    }

    #[test]
    fn test_new_row_applies_defaults() {
        let draft = NewMember {
            name: Some("Taro".to_string()),
            ..NewMember::default()
        };
        let row = Member::new_row(1, draft);

        assert_eq!(row[0], json!(1));
        assert_eq!(row[1], json!("Taro"));
        assert_eq!(row[5], json!(DEFAULT_ROLE));
        // createdAt defaults to today, an ISO date string.
        assert_eq!(row[8].as_str().unwrap().len(), 10);
    }

    #[test]
    fn test_draft_accepts_uni_alias() {
        let draft: NewMember = serde_json::from_value(json!({
            "name": "Taro",
            "uni": "Waseda"
        }))
        .unwrap();

        assert_eq!(draft.university.as_deref(), Some("Waseda"));
    }

    #[test]
    fn test_member_serializes_camel_case() {
        let member = Member::from_row(&[json!(1)]);
        let value = serde_json::to_value(&member).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
