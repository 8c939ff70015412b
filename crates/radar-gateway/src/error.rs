//! HTTP mapping for `RadarError`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use radar_core::error::{ClientCode, RadarError};

/// Handler-facing error wrapper.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub RadarError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// Body that fails to parse or has wrong field types is a validation failure,
// same as an out-of-range field.
impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError(RadarError::Validation(r.body_text()))
    }
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ClientCode::Conflict => StatusCode::CONFLICT,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, code = code.as_str(), "request rejected");
        }
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
