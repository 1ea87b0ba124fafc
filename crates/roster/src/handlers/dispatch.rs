//! The action dispatcher: one endpoint, eleven actions.

use std::collections::HashMap;

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use roster_core::records::AttendanceBook;

use crate::state::AppState;

use super::ApiError;

/// Handles both GET and POST on `/`.
///
/// The `action` query parameter selects the operation. `add*`/`save*` actions
/// read their JSON payload from the `data` query parameter or, failing that,
/// the raw request body; delete actions take their `id` straight from the
/// query string. Every outcome becomes the uniform envelope:
/// `{"success": true, "data": ...}` on success, `{"error": "..."}` otherwise.
pub async fn handle_request(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    match dispatch(&state, &params, &body).await {
        Ok(data) => Json(json!({ "success": true, "data": data })).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn dispatch(
    state: &AppState,
    params: &HashMap<String, String>,
    body: &Bytes,
) -> Result<Value, ApiError> {
    let action = params.get("action").ok_or(ApiError::MissingAction)?;
    tracing::debug!(action, "dispatching");

    let data = match action.as_str() {
        "getMembers" => to_data(&state.members.list().await?)?,
        "addMember" => to_data(&state.members.add(payload(params, body)?).await?)?,
        "deleteMember" => to_data(&state.members.delete(id_param(params)).await?)?,

        "getAttendance" => to_data(&state.attendance.get_all().await?)?,
        "saveAttendance" => {
            let book: AttendanceBook = payload(params, body)?;
            state.attendance.save_all(&book).await?;
            json!({ "success": true })
        }

        "getMentoring" => to_data(&state.mentoring.list().await?)?,
        "addMentoring" => to_data(&state.mentoring.add(payload(params, body)?).await?)?,
        "deleteMentoring" => to_data(&state.mentoring.delete(id_param(params)).await?)?,

        "getPitchTeams" => to_data(&state.pitch_teams.list().await?)?,
        "addPitchTeam" => to_data(&state.pitch_teams.add(payload(params, body)?).await?)?,
        "deletePitchTeam" => to_data(&state.pitch_teams.delete(id_param(params)).await?)?,

        other => return Err(ApiError::UnknownAction(other.to_string())),
    };

    Ok(data)
}

/// The delete id, taken directly from the query string. An absent id simply
/// never matches a row, which surfaces as the collection's not-found payload.
fn id_param(params: &HashMap<String, String>) -> &str {
    params.get("id").map(String::as_str).unwrap_or("")
}

/// Decodes the JSON payload for `add*`/`save*` actions. The `data` query
/// parameter takes precedence over the request body.
fn payload<T: DeserializeOwned>(
    params: &HashMap<String, String>,
    body: &Bytes,
) -> Result<T, ApiError> {
    let raw = match params.get("data") {
        Some(data) => data.as_bytes(),
        None if !body.is_empty() => body.as_ref(),
        None => return Err(ApiError::Execution(anyhow!("request payload is missing"))),
    };
    serde_json::from_slice(raw).map_err(|e| ApiError::Execution(e.into()))
}

fn to_data<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Execution(e.into()))
}
