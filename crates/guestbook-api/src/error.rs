use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use guestbook_store::StoreError;

/// Everything a handler can fail with. Statuses come from a fixed mapping,
/// not from stringifying whatever went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create body missing `name` or `message` — caught before any store
    /// call. The message matches what the web client displays.
    #[error("Name and message are required")]
    MissingField,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingField => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("store call failed: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
