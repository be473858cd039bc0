use lexigraph::{Ancestor, Digraph, Sap, SapError};

/// The digraph from the classic SAP exercise:
///
/// ```text
///         0
///        / \
///       1   2
///      / \   \
///     3   4   5
///    ...
/// ```
///
/// 25 vertices, every child pointing at its parent in a binary-ish tree.
fn tree_digraph() -> Digraph {
    let edges = [
        (1, 0), (2, 0), (3, 1), (4, 1), (5, 2), (6, 2), (7, 3), (8, 3),
        (9, 5), (10, 5), (11, 10), (12, 10), (13, 7), (14, 7), (15, 9),
        (16, 9), (17, 10), (18, 10), (19, 12), (20, 12), (21, 16), (22, 16),
        (23, 20), (24, 20),
    ];
    let mut g = Digraph::with_vertices(25);
    for (v, w) in edges {
        g.add_edge(v, w).unwrap();
    }
    g
}

#[test]
fn known_distances_in_the_tree() {
    let sap = Sap::new(&tree_digraph());

    // Standard checks for this fixture.
    assert_eq!(sap.find(13, 16).unwrap(), Some(Ancestor { vertex: 0, length: 8 }));
    assert_eq!(sap.find(23, 24).unwrap(), Some(Ancestor { vertex: 20, length: 2 }));
    assert_eq!(sap.find(17, 6).unwrap(), Some(Ancestor { vertex: 2, length: 4 }));
    assert_eq!(sap.find(1, 6).unwrap(), Some(Ancestor { vertex: 0, length: 3 }));
}

#[test]
fn symmetry_over_all_pairs() {
    let sap = Sap::new(&tree_digraph());
    for v in 0..25 {
        for w in (v + 1)..25 {
            assert_eq!(sap.find(v, w).unwrap(), sap.find(w, v).unwrap(), "pair ({v}, {w})");
        }
    }
}

#[test]
fn every_vertex_is_its_own_zero_length_ancestor() {
    let sap = Sap::new(&tree_digraph());
    for v in 0..25 {
        assert_eq!(sap.length(v, v).unwrap(), Some(0));
        assert_eq!(sap.ancestor(v, v).unwrap(), Some(v));
    }
}

#[test]
fn two_engines_agree() {
    let g = tree_digraph();
    let a = Sap::new(&g);
    let b = Sap::new(&g);
    for v in 0..25 {
        for w in 0..25 {
            assert_eq!(a.find(v, w).unwrap(), b.find(v, w).unwrap());
        }
    }
}

#[test]
fn disconnected_components_yield_no_path() {
    // Two separate chains: 1 -> 0 and 3 -> 2.
    let mut g = Digraph::with_vertices(4);
    g.add_edge(1, 0).unwrap();
    g.add_edge(3, 2).unwrap();
    let sap = Sap::new(&g);

    assert_eq!(sap.length(1, 3).unwrap(), None);
    assert_eq!(sap.ancestor(1, 3).unwrap(), None);
    assert_eq!(sap.length_of_sets(&[0, 1], &[2, 3]).unwrap(), None);
}

#[test]
fn errors_are_typed_not_generic() {
    let sap = Sap::new(&tree_digraph());

    assert!(matches!(
        sap.length(0, 25),
        Err(SapError::VertexOutOfBounds { vertex: 25, bound: 25 })
    ));
    assert!(matches!(sap.length_of_sets(&[], &[1]), Err(SapError::EmptySet)));
}

#[test]
fn memo_survives_mixed_query_shapes() {
    let sap = Sap::new(&tree_digraph());

    let direct = sap.find(13, 16).unwrap();
    let as_sets = sap.find_sets(&[16], &[13]).unwrap();
    assert_eq!(direct, as_sets);
    assert_eq!(sap.cache_hits(), 1);

    let wider = sap.find_sets(&[13, 14], &[16]).unwrap();
    assert_eq!(wider, Some(Ancestor { vertex: 0, length: 8 }));
    assert_eq!(sap.cache_hits(), 1); // different set contents, fresh entry
}
