//! API module for the Glossary Server
//!
//! This module contains the API routes and handlers for the Glossary Server.

use axum::{
    Router,
    routing::get,
};
use serde::{Serialize, Deserialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod graph;
pub mod health;
pub mod terms;

use crate::server::GlossaryServer;

/// Result envelope for add, update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
    /// Whether the operation took effect
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

impl OperationStatus {
    /// Successful outcome
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    /// Failed outcome
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Build the router for API endpoints
pub fn build_router(server: Arc<GlossaryServer>) -> Router {
    Router::new()
        // Term queries and mutations
        .route("/api/terms", get(terms::list_terms_handler).post(terms::add_term_handler))
        .route(
            "/api/terms/:name",
            get(terms::get_term_handler)
                .put(terms::update_term_handler)
                .delete(terms::delete_term_handler),
        )

        // Graph view
        .route("/api/graph", get(graph::get_graph_handler))

        // Health check
        .route("/health", get(health::health_check))

        .fallback(terms::not_found_handler)
        .layer(TraceLayer::new_for_http())

        // Shared state
        .with_state(server)
}

// Re-export all modules for easier imports
pub use errors::*;
pub use graph::*;
pub use health::*;
pub use terms::*;
