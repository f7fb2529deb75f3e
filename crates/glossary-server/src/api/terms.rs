//! Term endpoints
//!
//! Lookup, listing and the add/update/delete mutations. Mutations answer
//! with an [`OperationStatus`] envelope on both success and failure.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use glossary_core::loader::TermRecord;
use glossary_core::Term;

use super::errors::{operation_failure, ApiError};
use super::OperationStatus;
use crate::error::ServerError;
use crate::server::GlossaryServer;

/// List every term
pub async fn list_terms_handler(
    State(server): State<Arc<GlossaryServer>>,
) -> Json<Vec<Term>> {
    Json(server.get_all_terms())
}

/// Get a single term by name
pub async fn get_term_handler(
    State(server): State<Arc<GlossaryServer>>,
    Path(name): Path<String>,
) -> Result<Json<Term>, ApiError> {
    let term = server.get_term_by_name(&name)?;
    Ok(Json(term))
}

/// Add a new term
pub async fn add_term_handler(
    State(server): State<Arc<GlossaryServer>>,
    payload: Result<Json<TermRecord>, JsonRejection>,
) -> Response {
    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return rejected_body(rejection),
    };
    let name = record.name.clone();
    match server.add_term(record.into_term()) {
        Ok(()) => {
            info!("Term '{}' added", name);
            (
                StatusCode::CREATED,
                Json(OperationStatus::ok(format!("Term '{}' added", name))),
            )
                .into_response()
        }
        Err(err) => operation_failure(err),
    }
}

/// Replace an existing term
pub async fn update_term_handler(
    State(server): State<Arc<GlossaryServer>>,
    Path(name): Path<String>,
    payload: Result<Json<TermRecord>, JsonRejection>,
) -> Response {
    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return rejected_body(rejection),
    };
    match server.update_term(&name, record.into_term()) {
        Ok(()) => {
            info!("Term '{}' updated", name);
            Json(OperationStatus::ok(format!("Term '{}' updated", name))).into_response()
        }
        Err(err) => operation_failure(err),
    }
}

/// Delete a term and every relation touching it
pub async fn delete_term_handler(
    State(server): State<Arc<GlossaryServer>>,
    Path(name): Path<String>,
) -> Response {
    match server.delete_term(&name) {
        Ok(()) => {
            info!("Term '{}' deleted", name);
            Json(OperationStatus::ok(format!("Term '{}' deleted", name))).into_response()
        }
        Err(err) => operation_failure(err),
    }
}

/// Bodies that are not a term record fail with the usual envelope
fn rejected_body(rejection: JsonRejection) -> Response {
    operation_failure(ServerError::ValidationError(rejection.body_text()))
}

/// Fallback for unknown routes
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}
