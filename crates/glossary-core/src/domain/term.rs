use serde::{Deserialize, Serialize};

/// External reference attached to a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub url: String,

    /// Human-readable title
    pub title: String,
}

impl Link {
    /// Create a new link
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Definition text of a term plus its ordered source links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition text
    pub text: String,

    /// Source links, in insertion order
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Directed, typed edge from one term to another, by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Name of the owning term
    pub from_term: String,

    /// Name of the target term. May name a term that does not exist.
    pub to_term: String,

    /// Opaque relation label
    pub relation_type: String,
}

impl Relation {
    /// Create a new relation
    pub fn new(
        from_term: impl Into<String>,
        to_term: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            from_term: from_term.into(),
            to_term: to_term.into(),
            relation_type: relation_type.into(),
        }
    }

    /// Whether either endpoint of this edge is `name`
    pub fn touches(&self, name: &str) -> bool {
        self.from_term == name || self.to_term == name
    }
}

/// Aggregate: glossary term
///
/// Keyed by `name`. Owns its definition and its outbound relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Unique name, the primary key
    pub name: String,

    /// Definition of the term
    #[serde(default)]
    pub definition: Definition,

    /// Outbound relations, in insertion order
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Term {
    /// Create a term with the given definition text and no links or relations
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: Definition {
                text: text.into(),
                links: Vec::new(),
            },
            relations: Vec::new(),
        }
    }

    /// Append a source link
    pub fn with_link(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.definition.links.push(Link::new(url, title));
        self
    }

    /// Append an outbound relation owned by this term
    pub fn with_relation(mut self, to_term: impl Into<String>, relation_type: impl Into<String>) -> Self {
        let relation = Relation::new(self.name.clone(), to_term, relation_type);
        self.relations.push(relation);
        self
    }

    /// Rewrite `from_term` on every relation to this term's name
    pub fn reown_relations(&mut self) {
        for relation in &mut self.relations {
            if relation.from_term != self.name {
                relation.from_term.clone_from(&self.name);
            }
        }
    }
}
