use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::term::Relation;

/// Node/edge projection of the term store
///
/// Derived on demand, never stored. `nodes` holds every live term name and
/// `edges` the union of every term's relation list. An edge may point at a
/// name missing from `nodes` when a term was added with a dangling target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Live term names
    pub nodes: Vec<String>,

    /// All relations, grouped by owning term in relation order
    pub edges: Vec<Relation>,
}

impl Graph {
    /// Edges whose target is not a node of this graph
    pub fn dangling_edges(&self) -> Vec<&Relation> {
        let nodes: HashSet<&str> = self.nodes.iter().map(String::as_str).collect();
        self.edges
            .iter()
            .filter(|edge| !nodes.contains(edge.to_term.as_str()))
            .collect()
    }
}
