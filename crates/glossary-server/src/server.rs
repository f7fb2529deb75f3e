//! Main Glossary Server implementation
//!
//! This module contains the GlossaryServer implementation. The server is the
//! service facade: each operation forwards 1:1 onto the term repository and
//! turns store outcomes into [`ServerError`]s.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

use glossary_core::{Graph, Term, TermRepository};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Main server implementation
#[derive(Clone)]
pub struct GlossaryServer {
    /// Configuration
    pub config: ServerConfig,

    /// Term store
    repository: Arc<dyn TermRepository>,
}

/// Manual Debug implementation that doesn't try to debug the trait object
impl std::fmt::Debug for GlossaryServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlossaryServer")
            .field("config", &self.config)
            .field("terms", &self.repository.len())
            .finish()
    }
}

impl GlossaryServer {
    /// Create a new GlossaryServer
    pub fn new(config: ServerConfig, repository: Arc<dyn TermRepository>) -> Self {
        Self { config, repository }
    }

    /// Bind the configured address and serve until a shutdown signal arrives
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Glossary Server");

        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        self.serve(listener).await
    }

    /// Serve on an already-bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> ServerResult<()> {
        let app = crate::api::build_router(Arc::new(self));

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Glossary Server stopped");
        Ok(())
    }

    /// Number of live terms
    pub fn term_count(&self) -> usize {
        self.repository.len()
    }

    /// Get every term, sorted by name
    pub fn get_all_terms(&self) -> Vec<Term> {
        let mut terms = self.repository.get_all();
        terms.sort_by(|a, b| a.name.cmp(&b.name));
        terms
    }

    /// Get a term by name
    pub fn get_term_by_name(&self, name: &str) -> ServerResult<Term> {
        Ok(self.repository.get_by_name(name)?)
    }

    /// Get the node/edge view of the glossary
    pub fn get_graph(&self) -> Graph {
        self.repository.get_graph()
    }

    /// Add a new term
    pub fn add_term(&self, term: Term) -> ServerResult<()> {
        validate_name(&term.name)?;
        debug!("Adding term '{}'", term.name);
        Ok(self.repository.add(term)?)
    }

    /// Replace the term filed under `name`
    pub fn update_term(&self, name: &str, term: Term) -> ServerResult<()> {
        if term.name != name {
            return Err(ServerError::ValidationError(format!(
                "Term name '{}' does not match path '{}'",
                term.name, name
            )));
        }
        debug!("Updating term '{}'", name);
        Ok(self.repository.update(term)?)
    }

    /// Delete a term and every relation touching it
    pub fn delete_term(&self, name: &str) -> ServerResult<()> {
        debug!("Deleting term '{}'", name);
        Ok(self.repository.delete(name)?)
    }
}

fn validate_name(name: &str) -> ServerResult<()> {
    if name.trim().is_empty() {
        return Err(ServerError::ValidationError("Term name must not be empty".to_string()));
    }
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
