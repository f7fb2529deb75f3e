use thiserror::Error;

/// Error type for term store operations
///
/// These are the only failures the store reports. Both are expected business
/// outcomes and are returned as ordinary `Err` values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossaryError {
    /// No term is filed under the given name
    #[error("Term '{0}' not found")]
    NotFound(String),

    /// A term is already filed under the given name
    #[error("Term '{0}' already exists")]
    AlreadyExists(String),
}

/// Result type for term store operations
pub type GlossaryResult<T> = Result<T, GlossaryError>;
