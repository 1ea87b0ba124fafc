use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use roster_core::storage::StoreError;

/// Errors surfaced at the dispatch boundary.
///
/// Client-input errors (missing or unknown action) map to 400. Anything that
/// fails during payload parsing or repository execution maps to 500, carrying
/// the underlying error's textual description. Every failure becomes the
/// uniform `{"error": ...}` envelope; nothing propagates past the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no action specified")]
    MissingAction,
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Execution(err.into())
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAction | Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        (
            self.status_code(),
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
