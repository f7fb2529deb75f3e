//! Error types for the Glossary Server
//!
//! This module contains the error types used throughout the server.

use thiserror::Error;
use glossary_core::{GlossaryError, LoaderError};

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Term not found
    #[error("Term '{0}' not found")]
    NotFound(String),

    /// Term name already taken
    #[error("Term '{0}' already exists")]
    AlreadyExists(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Glossary data could not be loaded
    #[error("Loader error: {0}")]
    LoaderError(#[from] LoaderError),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<GlossaryError> for ServerError {
    fn from(err: GlossaryError) -> Self {
        match err {
            GlossaryError::NotFound(name) => ServerError::NotFound(name),
            GlossaryError::AlreadyExists(name) => ServerError::AlreadyExists(name),
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::ConfigError(format!("Invalid bind address: {}", err))
    }
}
