use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use glossary_core::{Graph, GlossaryError, GlossaryResult, Term, TermRepository};

/// Outcome of a bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Terms inserted
    pub loaded: usize,
    /// Terms skipped because their name was already present
    pub skipped: usize,
}

/// In-memory implementation of the TermRepository
///
/// The whole collection sits behind one read-write lock. Readers copy out
/// under the shared lock; `add`, `update` and `delete` hold the exclusive
/// lock for their full duration, including the relation cascade in `delete`.
#[derive(Debug, Default)]
pub struct InMemoryTermRepository {
    terms: RwLock<HashMap<String, Term>>,
}

impl InMemoryTermRepository {
    /// Create an empty in-memory term repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `terms`
    pub fn with_terms<I>(terms: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = Term>,
    {
        let repository = Self::new();
        let report = repository.load(terms);
        (repository, report)
    }

    /// Insert every term through `add`, skipping names already present
    pub fn load<I>(&self, terms: I) -> LoadReport
    where
        I: IntoIterator<Item = Term>,
    {
        let mut report = LoadReport::default();

        for term in terms {
            match self.add(term) {
                Ok(()) => report.loaded += 1,
                Err(err) => {
                    warn!("Skipping term during load: {}", err);
                    report.skipped += 1;
                }
            }
        }

        info!("Loaded {} terms ({} skipped)", report.loaded, report.skipped);
        report
    }
}

impl TermRepository for InMemoryTermRepository {
    fn get_all(&self) -> Vec<Term> {
        let terms = self.terms.read();
        terms.values().cloned().collect()
    }

    fn get_by_name(&self, name: &str) -> GlossaryResult<Term> {
        let terms = self.terms.read();
        terms
            .get(name)
            .cloned()
            .ok_or_else(|| GlossaryError::NotFound(name.to_string()))
    }

    fn get_graph(&self) -> Graph {
        let terms = self.terms.read();

        let nodes = terms.keys().cloned().collect();
        let edges = terms
            .values()
            .flat_map(|term| term.relations.iter().cloned())
            .collect();

        Graph { nodes, edges }
    }

    fn add(&self, mut term: Term) -> GlossaryResult<()> {
        term.reown_relations();

        let mut terms = self.terms.write();
        if terms.contains_key(&term.name) {
            return Err(GlossaryError::AlreadyExists(term.name));
        }

        debug!("Adding term '{}' with {} relations", term.name, term.relations.len());
        terms.insert(term.name.clone(), term);
        Ok(())
    }

    fn update(&self, mut term: Term) -> GlossaryResult<()> {
        term.reown_relations();

        let mut terms = self.terms.write();
        match terms.get_mut(&term.name) {
            Some(existing) => {
                debug!("Replacing term '{}'", term.name);
                *existing = term;
                Ok(())
            }
            None => Err(GlossaryError::NotFound(term.name)),
        }
    }

    fn delete(&self, name: &str) -> GlossaryResult<()> {
        let mut terms = self.terms.write();
        if terms.remove(name).is_none() {
            return Err(GlossaryError::NotFound(name.to_string()));
        }

        // Prune in place so surviving relations keep their order.
        let mut pruned = 0;
        for term in terms.values_mut() {
            let before = term.relations.len();
            term.relations.retain(|relation| !relation.touches(name));
            pruned += before - term.relations.len();
        }

        debug!("Deleted term '{}', pruned {} relations", name, pruned);
        Ok(())
    }

    fn len(&self) -> usize {
        self.terms.read().len()
    }
}
