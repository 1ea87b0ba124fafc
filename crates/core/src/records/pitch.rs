use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{cell_text, cell_text_or, Row, SheetSpec};

use super::{id_cell, text_or_else, today, SheetRecord};

/// Affiliation flag assigned when a new team does not specify one.
pub const DEFAULT_TIB: &str = "no";

/// A pitch team and its registration status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchTeam {
    pub id: Value,
    pub team: String,
    pub leader: String,
    /// Whether the team is affiliated with the incubation base.
    pub tib: String,
    pub status: String,
    pub created_at: String,
}

/// Payload for `addPitchTeam`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPitchTeam {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub tib: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SheetRecord for PitchTeam {
    type Draft = NewPitchTeam;

    const SHEET: SheetSpec = SheetSpec {
        name: "pitch_teams",
        header: &["ID", "Team", "Leader", "TIB Affiliation", "Status", "Created At"],
    };

    const ENTITY: &'static str = "pitch team";

    fn from_row(row: &[Value]) -> Self {
        Self {
            id: id_cell(row),
            team: cell_text(row, 1),
            leader: cell_text(row, 2),
            tib: cell_text_or(row, 3, DEFAULT_TIB),
            status: cell_text(row, 4),
            created_at: cell_text(row, 5),
        }
    }

    fn new_row(id: u64, draft: NewPitchTeam) -> Row {
        vec![
            Value::from(id),
            Value::from(draft.team.unwrap_or_default()),
            Value::from(draft.leader.unwrap_or_default()),
            Value::from(text_or_else(draft.tib, || DEFAULT_TIB.to_string())),
            Value::from(draft.status.unwrap_or_default()),
            Value::from(text_or_else(draft.created_at, today)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_row_defaults_tib_to_no() {
        let team = PitchTeam::from_row(&[json!(4), json!("Orbit")]);

        assert_eq!(team.team, "Orbit");
        assert_eq!(team.tib, DEFAULT_TIB);
        assert_eq!(team.status, "");
    }

    #[test]
    fn test_new_row_applies_defaults() {
        let draft = NewPitchTeam {
            team: Some("Orbit".to_string()),
            leader: Some("Kimura".to_string()),
            ..NewPitchTeam::default()
        };
        let row = PitchTeam::new_row(2, draft);

        assert_eq!(row[0], json!(2));
        assert_eq!(row[3], json!(DEFAULT_TIB));
        assert_eq!(row[5].as_str().unwrap().len(), 10);
    }

    #[test]
    fn test_new_row_keeps_explicit_tib() {
        let draft = NewPitchTeam {
            tib: Some("yes".to_string()),
            ..NewPitchTeam::default()
        };
        let row = PitchTeam::new_row(1, draft);

        assert_eq!(row[3], json!("yes"));
    }
}
