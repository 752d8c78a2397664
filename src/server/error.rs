use crate::boundmap_error::BoundmapError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// [`BoundmapError`] as an HTTP response.
///
/// Client errors echo the error text. Server errors log the detail and
/// answer with a generic message.
#[derive(Debug)]
pub struct ApiError(pub BoundmapError);

impl From<BoundmapError> for ApiError {
    fn from(err: BoundmapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            log::error!(
                "Request failed: {}",
                serde_json::to_string(&self.0).unwrap_or_else(|_| self.0.to_string())
            );
            error_response(status, INTERNAL_ERROR_MESSAGE)
        } else {
            log::warn!("Rejected request: {}", self.0);
            error_response(status, self.0.to_string())
        }
    }
}
