/// Term, definition, link and relation models
pub mod term;

/// Derived graph view
pub mod graph;

/// Repository interfaces
pub mod repository;
