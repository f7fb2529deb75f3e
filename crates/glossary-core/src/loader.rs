//! Loader for glossary documents
//!
//! Turns a structured glossary document into an ordered list of [`Term`]s.
//! The document lists terms with their definition and outbound relations;
//! each relation names only its target and type, the owner being the
//! enclosing term.
//!
//! ```yaml
//! terms:
//!   - name: Tensor
//!     definition:
//!       text: A multi-dimensional array
//!       links:
//!         - url: https://en.wikipedia.org/wiki/Tensor
//!           title: Wikipedia
//!     relations:
//!       - to: Vector
//!         type: generalizes
//! ```
//!
//! Parsing does not check that relation targets exist, nor that names are
//! unique. Duplicates are left for the store to reject.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::domain::term::{Definition, Relation, Term};

/// Errors raised while loading a glossary document
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors that occur during JSON parsing
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors that occur during YAML parsing
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML
    #[error("Unsupported glossary format: {0}")]
    UnsupportedFormat(String),

    /// A record is structurally valid but unusable
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Top-level glossary document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlossaryDocument {
    /// Term records, in document order
    #[serde(default)]
    pub terms: Vec<TermRecord>,
}

/// A term as written in a glossary document or a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Term name
    pub name: String,

    /// Definition text and links
    #[serde(default)]
    pub definition: Definition,

    /// Outbound relations
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
}

/// An outbound relation as written in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Target term name
    pub to: String,

    /// Relation label
    #[serde(rename = "type")]
    pub relation_type: String,
}

impl TermRecord {
    /// Convert into a term whose relations are owned by `self.name`
    pub fn into_term(self) -> Term {
        let relations = self
            .relations
            .into_iter()
            .map(|rel| Relation::new(self.name.clone(), rel.to, rel.relation_type))
            .collect();

        Term {
            name: self.name,
            definition: self.definition,
            relations,
        }
    }
}

impl GlossaryDocument {
    /// Validate records and convert them into terms, preserving order
    pub fn into_terms(self) -> LoaderResult<Vec<Term>> {
        let mut terms = Vec::with_capacity(self.terms.len());

        for (index, record) in self.terms.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(LoaderError::Validation(format!(
                    "term at position {} has an empty name",
                    index
                )));
            }
            terms.push(record.into_term());
        }

        Ok(terms)
    }
}

/// Parse a JSON glossary document
pub fn parse_json(source: &str) -> LoaderResult<Vec<Term>> {
    let document: GlossaryDocument = serde_json::from_str(source)?;
    document.into_terms()
}

/// Parse a YAML glossary document
pub fn parse_yaml(source: &str) -> LoaderResult<Vec<Term>> {
    let document: GlossaryDocument = serde_yaml::from_str(source)?;
    document.into_terms()
}

/// Load a glossary document from disk, choosing the format by extension
pub fn load_terms_from_path(path: impl AsRef<Path>) -> LoaderResult<Vec<Term>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let source = std::fs::read_to_string(path)?;
    let terms = match extension.as_str() {
        "json" => parse_json(&source)?,
        "yaml" | "yml" => parse_yaml(&source)?,
        other => {
            return Err(LoaderError::UnsupportedFormat(format!(
                "{} (extension '{}')",
                path.display(),
                other
            )))
        }
    };

    debug!("Parsed {} terms from {}", terms.len(), path.display());
    Ok(terms)
}
