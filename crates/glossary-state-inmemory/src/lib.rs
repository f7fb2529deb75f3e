//! In-memory term graph store for the glossary service
//!
//! This crate provides the in-memory implementation of the
//! [`TermRepository`](glossary_core::TermRepository) contract defined in the
//! glossary-core crate. Nothing is persisted; the store lives as long as the
//! process and is seeded once at startup by the loader.

pub mod repository;
pub use repository::{InMemoryTermRepository, LoadReport};

#[cfg(test)]
mod tests;
