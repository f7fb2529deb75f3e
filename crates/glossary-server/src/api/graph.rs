//! Graph view endpoint

use axum::{extract::State, Json};
use std::sync::Arc;

use glossary_core::Graph;

use crate::server::GlossaryServer;

/// Get every term name and every relation as one consistent view
pub async fn get_graph_handler(
    State(server): State<Arc<GlossaryServer>>,
) -> Json<Graph> {
    Json(server.get_graph())
}
