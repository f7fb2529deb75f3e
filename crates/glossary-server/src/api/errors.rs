//! Error handling for the Glossary Server API
//!
//! This module maps server errors onto HTTP responses. Queries answer with a
//! standard error body; mutations answer with an [`OperationStatus`] envelope.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use super::OperationStatus;
use crate::error::ServerError;

/// API Error type for returning standard error responses
#[derive(Debug)]
pub enum ApiError {
    /// Not found (404)
    NotFound(String),
    /// Wrapped server error
    ServerError(ServerError),
}

impl From<ServerError> for ApiError {
    fn from(err: ServerError) -> Self {
        ApiError::ServerError(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::ServerError(err) => write!(f, "Server Error: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "ERR_NOT_FOUND", msg),
            ApiError::ServerError(err) => {
                let (status, error_code) = classify(&err);
                (status, error_code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "errorDetails": {
                "errorCode": error_code,
                "errorMessage": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Failure response for add, update and delete
pub fn operation_failure(err: ServerError) -> Response {
    let (status, _) = classify(&err);
    (status, Json(OperationStatus::failed(err.to_string()))).into_response()
}

/// Status code and error code for a server error
pub fn classify(err: &ServerError) -> (StatusCode, &'static str) {
    match err {
        ServerError::NotFound(name) => {
            warn!("Term not found: {}", name);
            (StatusCode::NOT_FOUND, "ERR_NOT_FOUND_TERM")
        }
        ServerError::AlreadyExists(name) => {
            warn!("Term already exists: {}", name);
            (StatusCode::CONFLICT, "ERR_TERM_ALREADY_EXISTS")
        }
        ServerError::ValidationError(_) => (StatusCode::BAD_REQUEST, "ERR_VALIDATION_ERROR"),
        ServerError::ConfigError(msg) => {
            error!("Configuration error surfaced to API: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, "ERR_CONFIG_ERROR")
        }
        ServerError::LoaderError(err) => {
            error!("Loader error surfaced to API: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "ERR_LOADER_ERROR")
        }
        ServerError::InternalError(msg) => {
            error!("Internal error: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, "ERR_INTERNAL_SERVER_ERROR")
        }
    }
}
