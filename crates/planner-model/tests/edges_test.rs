use planner_model::{EdgeKey, EdgeSet};

#[test]
fn duplicate_pairs_collapse_to_one_edge() {
    let mut edges = EdgeSet::new();
    assert!(edges.insert("a", "b"));
    assert!(!edges.insert("a", "b"));
    assert!(edges.insert("b", "a"));
    assert_eq!(edges.len(), 2);
    assert!(edges.contains("a", "b"));
    assert!(edges.contains("b", "a"));
}

#[test]
fn iteration_keeps_first_seen_order() {
    let edges: EdgeSet = [("c", "d"), ("a", "b"), ("c", "d"), ("b", "c")]
        .into_iter()
        .collect();
    let keys: Vec<&EdgeKey> = edges.iter().collect();
    assert_eq!(
        keys,
        vec![
            &EdgeKey::new("c", "d"),
            &EdgeKey::new("a", "b"),
            &EdgeKey::new("b", "c"),
        ]
    );
}

#[test]
fn self_loops_are_kept_but_not_adjacent() {
    let mut edges = EdgeSet::new();
    edges.insert("a", "a");
    edges.insert("a", "b");

    assert_eq!(edges.len(), 2);
    assert!(edges.contains("a", "a"));
    assert!(edges.incoming("a").is_empty());
    assert_eq!(edges.successors("a"), vec!["b"]);
    assert_eq!(edges.degree("a"), 1);
    assert_eq!(edges.degree("b"), 1);
}

#[test]
fn predecessors_and_degree() {
    let edges: EdgeSet = [("a", "c"), ("b", "c"), ("c", "d")].into_iter().collect();
    assert_eq!(edges.predecessors("c"), vec!["a", "b"]);
    assert_eq!(edges.successors("c"), vec!["d"]);
    assert_eq!(edges.degree("c"), 3);
    assert!(!edges.has_incoming("a"));
    assert_eq!(edges.degree("unknown"), 0);
}
