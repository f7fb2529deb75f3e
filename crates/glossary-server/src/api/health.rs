//! Health check endpoint for the Glossary Server
//!
//! This module contains the health check handler.

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
    http::StatusCode,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::server::GlossaryServer;

/// Health check handler
///
/// Reports the server version and the number of live terms.
pub async fn health_check(
    State(server): State<Arc<GlossaryServer>>,
) -> impl IntoResponse {
    debug!("Health check requested");

    let response = json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
        "terms": server.term_count(),
    });

    (StatusCode::OK, Json(response))
}
