use crate::{InMemoryTermRepository, LoadReport};
use glossary_core::{GlossaryError, Relation, Term, TermRepository};
use pretty_assertions::assert_eq;

fn seeded(terms: Vec<Term>) -> InMemoryTermRepository {
    let (repo, report) = InMemoryTermRepository::with_terms(terms);
    assert_eq!(report.skipped, 0);
    repo
}

fn sorted_names(repo: &InMemoryTermRepository) -> Vec<String> {
    let mut names: Vec<_> = repo.get_all().into_iter().map(|t| t.name).collect();
    names.sort();
    names
}

#[test]
fn test_empty_store() {
    let repo = InMemoryTermRepository::new();

    assert!(repo.is_empty());
    assert!(repo.get_all().is_empty());
    assert_eq!(repo.get_graph(), glossary_core::Graph::default());
    assert_eq!(repo.get_by_name(""), Err(GlossaryError::NotFound(String::new())));
}

#[test]
fn test_add_then_get_returns_equal_record() {
    let repo = InMemoryTermRepository::new();
    let term = Term::new("Tensor", "A multi-dimensional array")
        .with_link("https://en.wikipedia.org/wiki/Tensor", "Wikipedia")
        .with_relation("Vector", "generalizes")
        .with_relation("Matrix", "generalizes");

    repo.add(term.clone()).unwrap();

    assert_eq!(repo.get_by_name("Tensor").unwrap(), term);
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_add_existing_name_leaves_record_unchanged() {
    let original = Term::new("A", "original").with_relation("B", "references");
    let repo = seeded(vec![original.clone()]);

    let result = repo.add(Term::new("A", "replacement"));

    assert_eq!(result, Err(GlossaryError::AlreadyExists("A".to_string())));
    assert_eq!(repo.get_by_name("A").unwrap(), original);
}

#[test]
fn test_add_reowns_relations() {
    let repo = InMemoryTermRepository::new();
    let mut term = Term::new("A", "text");
    term.relations.push(Relation::new("Z", "B", "references"));

    repo.add(term).unwrap();

    let stored = repo.get_by_name("A").unwrap();
    assert_eq!(stored.relations, vec![Relation::new("A", "B", "references")]);
}

#[test]
fn test_add_with_dangling_target() {
    let repo = InMemoryTermRepository::new();

    repo.add(Term::new("C", "text").with_relation("D", "references")).unwrap();

    let graph = repo.get_graph();
    assert_eq!(graph.nodes, vec!["C".to_string()]);
    assert_eq!(graph.edges, vec![Relation::new("C", "D", "references")]);
    assert_eq!(graph.dangling_edges().len(), 1);
}

#[test]
fn test_update_absent_name_does_not_insert() {
    let repo = seeded(vec![Term::new("A", "a")]);

    let result = repo.update(Term::new("B", "b"));

    assert_eq!(result, Err(GlossaryError::NotFound("B".to_string())));
    assert_eq!(sorted_names(&repo), vec!["A"]);
}

#[test]
fn test_update_replaces_whole_record() {
    let repo = seeded(vec![Term::new("A", "old")
        .with_link("https://old.example", "old")
        .with_relation("B", "references")
        .with_relation("C", "references")]);

    let replacement = Term::new("A", "new").with_relation("D", "part_of");
    repo.update(replacement.clone()).unwrap();

    let stored = repo.get_by_name("A").unwrap();
    assert_eq!(stored, replacement);
    assert!(stored.definition.links.is_empty());
}

#[test]
fn test_delete_absent_name_is_noop() {
    let repo = seeded(vec![Term::new("A", "a").with_relation("B", "references")]);
    let before = repo.get_graph();

    assert_eq!(repo.delete("Z"), Err(GlossaryError::NotFound("Z".to_string())));
    assert_eq!(repo.get_graph(), before);
}

#[test]
fn test_delete_twice() {
    let repo = seeded(vec![Term::new("A", "a")]);

    assert_eq!(repo.delete("A"), Ok(()));
    assert_eq!(repo.delete("A"), Err(GlossaryError::NotFound("A".to_string())));
    assert!(repo.is_empty());
}

#[test]
fn test_delete_cascades_both_directions() {
    let repo = seeded(vec![
        Term::new("A", "a").with_relation("B", "references"),
        Term::new("B", "b").with_relation("A", "references"),
    ]);

    repo.delete("B").unwrap();

    let all = repo.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "A");
    assert!(all[0].relations.is_empty());

    let graph = repo.get_graph();
    assert_eq!(graph.nodes, vec!["A".to_string()]);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_delete_preserves_order_of_surviving_relations() {
    let repo = seeded(vec![
        Term::new("A", "a")
            .with_relation("B", "r1")
            .with_relation("X", "r2")
            .with_relation("C", "r3")
            .with_relation("X", "r4")
            .with_relation("D", "r5"),
        Term::new("X", "x"),
    ]);

    repo.delete("X").unwrap();

    let types: Vec<_> = repo
        .get_by_name("A")
        .unwrap()
        .relations
        .into_iter()
        .map(|r| r.relation_type)
        .collect();
    assert_eq!(types, vec!["r1", "r3", "r5"]);
}

#[test]
fn test_delete_prunes_dangling_edges_to_name() {
    // C points at D before D exists; deleting D later still prunes C -> D.
    let repo = seeded(vec![Term::new("C", "c").with_relation("D", "references")]);
    repo.add(Term::new("D", "d")).unwrap();

    repo.delete("D").unwrap();

    assert!(repo.get_graph().edges.is_empty());
}

#[test]
fn test_queries_return_copies() {
    let repo = seeded(vec![Term::new("A", "a").with_relation("B", "references")]);

    let mut copy = repo.get_by_name("A").unwrap();
    copy.relations.clear();
    copy.definition.text = "mutated".to_string();

    let mut all = repo.get_all();
    all[0].relations.clear();

    let stored = repo.get_by_name("A").unwrap();
    assert_eq!(stored.definition.text, "a");
    assert_eq!(stored.relations.len(), 1);
}

#[test]
fn test_get_all_order_is_stable() {
    let repo = seeded((0..32).map(|i| Term::new(format!("term-{}", i), "x")).collect());

    let first: Vec<_> = repo.get_all().into_iter().map(|t| t.name).collect();
    let second: Vec<_> = repo.get_all().into_iter().map(|t| t.name).collect();
    assert_eq!(first, second);
}

#[test_log::test]
fn test_load_skips_duplicates() {
    let repo = InMemoryTermRepository::new();

    let report = repo.load(vec![
        Term::new("A", "first"),
        Term::new("B", "b"),
        Term::new("A", "second"),
    ]);

    assert_eq!(report, LoadReport { loaded: 2, skipped: 1 });
    assert_eq!(repo.get_by_name("A").unwrap().definition.text, "first");
}
