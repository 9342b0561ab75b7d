use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::analyzer::AnalyzeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid image file")]
    InvalidImage,

    #[error("Malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Template error: {0}")]
    Template(#[from] crate::services::template_service::TemplateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        match e {
            AnalyzeError::Decode(_) => ApiError::InvalidImage,
            AnalyzeError::Quant(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidField { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidImage => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Multipart(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Template(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
