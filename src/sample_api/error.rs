//! Sample API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleApiError {
    /// Unknown collection under `/api/`
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server could not bind or stopped with an error
    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for SampleApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            SampleApiError::NotFound(_) => StatusCode::NOT_FOUND,
            SampleApiError::Server(_) | SampleApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Same body shape as Django REST framework errors
        let detail = match &self {
            SampleApiError::NotFound(_) => "Not found.".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
