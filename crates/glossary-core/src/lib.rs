//!
//! Glossary Core - Domain model for the glossary term graph
//!
//! This crate defines the term and relation models, the repository contract
//! for the term store, the store's error type, and the loader that turns a
//! structured glossary document into terms.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - terms, relations, graph view and repository contract
pub mod domain;

/// Loader for glossary documents
pub mod loader;

/// Error types
pub mod error;

// Re-export key types
pub use domain::graph::Graph;
pub use domain::repository::TermRepository;
pub use domain::term::{Definition, Link, Relation, Term};
pub use error::{GlossaryError, GlossaryResult};
pub use loader::{LoaderError, LoaderResult};
