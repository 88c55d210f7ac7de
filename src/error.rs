use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skin_tone::{AnalysisError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::InvalidRequest(e.body_text())
        }
    }
}

impl ApiError {
    /// Kind string rendered in the `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Analysis(e) => e.kind().as_str(),
            ApiError::InvalidRequest(_) => "InvalidRequest",
            ApiError::PayloadTooLarge(_) => "PayloadTooLarge",
            ApiError::Internal(_) => "Internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Analysis(e) => match e.kind() {
                ErrorKind::DecodeError | ErrorKind::UnknownPreference => StatusCode::BAD_REQUEST,
                ErrorKind::NoSkinDetected => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Analysis(e) => {
                format!("{} {}", e.kind().guidance(), capitalize(&e.to_string()))
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "error": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>() + ".",
        None => String::new(),
    }
}
