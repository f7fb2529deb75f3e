//!
//! Glossary Server - HTTP service facade for the glossary term graph
//!
//! This module exports all the components of the Glossary Server.

use std::sync::Arc;
use tracing::{info, warn};

use glossary_core::loader::load_terms_from_path;
use glossary_core::TermRepository;
use glossary_state_inmemory::InMemoryTermRepository;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use server::GlossaryServer;
pub use error::{ServerError, ServerResult};

/// Run function
///
/// Expects logging to be installed already, see [`init_logging`].
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Seed the term store
    let repository = create_repository(&config)?;

    // Create and run server
    let server = GlossaryServer::new(config, repository);
    server.run().await
}

/// Initialize logging
pub fn init_logging(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // A subscriber may already be installed (tests, embedding binaries)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Create the term store, seeded from the configured data file if any
pub fn create_repository(config: &ServerConfig) -> ServerResult<Arc<InMemoryTermRepository>> {
    let terms = match &config.data_file {
        Some(path) => {
            info!("Loading glossary from {}", path);
            load_terms_from_path(path)?
        }
        None => Vec::new(),
    };

    let (repository, report) = InMemoryTermRepository::with_terms(terms);
    info!("Term store ready with {} terms", report.loaded);

    let dangling = repository.get_graph().dangling_edges().len();
    if dangling > 0 {
        warn!("{} relations point at terms missing from the glossary", dangling);
    }

    Ok(Arc::new(repository))
}
