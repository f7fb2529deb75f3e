//! Repository trait for the term store
//!
//! This module defines the contract the service facade uses to reach the
//! term store. Implementations must serialize writers against each other and
//! against readers, so every call observes a consistent state.

use super::graph::Graph;
use super::term::Term;
use crate::error::GlossaryResult;

/// Repository for glossary terms and their relations
///
/// All methods are synchronous critical sections. Query methods return owned
/// copies, never references into the store.
pub trait TermRepository: Send + Sync {
    /// Get a point-in-time copy of every term
    fn get_all(&self) -> Vec<Term>;

    /// Get a term by name
    fn get_by_name(&self, name: &str) -> GlossaryResult<Term>;

    /// Get the node/edge projection of the whole store
    fn get_graph(&self) -> Graph;

    /// Insert a new term. Fails with `AlreadyExists` if the name is taken.
    fn add(&self, term: Term) -> GlossaryResult<()>;

    /// Replace the term filed under `term.name`. Fails with `NotFound` if absent.
    fn update(&self, term: Term) -> GlossaryResult<()>;

    /// Remove a term and every relation touching it. Fails with `NotFound` if absent.
    fn delete(&self, name: &str) -> GlossaryResult<()>;

    /// Number of live terms
    fn len(&self) -> usize;

    /// Whether the store holds no terms
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
