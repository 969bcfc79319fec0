// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property-based tests for edge-manifold classification.
//!
//! Random face lists over a small vertex pool so that shared and
//! over-shared edges show up often.
//!
//! Run with: cargo test -p meshcheck-topology -- proptest

use meshcheck_topology::{
    classify, classify_with, corner_edges, is_manifold, unique_edges, DedupStrategy, EdgeKey,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Triangles with three distinct indices drawn from `0..vertices`.
fn arb_face(vertices: u32) -> impl Strategy<Value = [u32; 3]> {
    prop::array::uniform3(0..vertices)
        .prop_filter("distinct corners", |f| f[0] != f[1] && f[1] != f[2] && f[2] != f[0])
}

fn arb_faces(max_faces: usize) -> impl Strategy<Value = Vec<[u32; 3]>> {
    (3u32..12).prop_flat_map(move |n| prop::collection::vec(arb_face(n), 0..=max_faces))
}

/// Any triple, including repeated indices.
fn arb_raw_faces(max_faces: usize) -> impl Strategy<Value = Vec<[u32; 3]>> {
    prop::collection::vec(prop::array::uniform3(0u32..6), 0..=max_faces)
}

// =============================================================================
// Property Tests: Counting
// =============================================================================

proptest! {
    /// Every corner-edge is counted exactly once.
    #[test]
    fn incidence_sums_to_corner_count(faces in arb_faces(40)) {
        let report = classify(&faces);
        prop_assert_eq!(report.incidence.iter().sum::<usize>(), 3 * faces.len());
        prop_assert!(report.incidence.iter().all(|&c| c >= 1));
    }

    /// Each corner-edge maps to the edge with its own canonical key.
    #[test]
    fn edge_map_preserves_keys(faces in arb_faces(40)) {
        for strategy in [DedupStrategy::Hash, DedupStrategy::Sort] {
            let table = unique_edges(&faces, strategy);
            for (i, ce) in corner_edges(&faces).iter().enumerate() {
                prop_assert_eq!(table.edges[table.edge_map[i]], ce.key());
            }
        }
    }

    /// Per-edge flags are exactly `count <= 2`.
    #[test]
    fn edge_flags_match_counts(faces in arb_faces(40)) {
        let report = classify(&faces);
        for (e, &count) in report.incidence.iter().enumerate() {
            prop_assert_eq!(report.edge_manifold[e], count <= 2);
        }
        for (f, row) in report.corner_manifold.iter().enumerate() {
            for c in 0..3 {
                let id = report.edge_map[f * 3 + c];
                prop_assert_eq!(row[c], report.edge_manifold[id]);
            }
        }
    }
}

// =============================================================================
// Property Tests: Fast path and strategies
// =============================================================================

proptest! {
    /// The boolean fast path agrees with the full breakdown.
    #[test]
    fn fast_path_agrees_with_classify(faces in arb_faces(60)) {
        let full = classify(&faces).mesh_manifold;
        prop_assert_eq!(is_manifold(&faces), full);
        prop_assert_eq!(classify_with(&faces, DedupStrategy::Sort).mesh_manifold, full);
    }

    /// Agreement also holds for degenerate triples.
    #[test]
    fn fast_path_agrees_on_degenerate_faces(faces in arb_raw_faces(30)) {
        prop_assert_eq!(is_manifold(&faces), classify(&faces).mesh_manifold);
    }

    /// Both strategies discover the same edge set with the same counts.
    #[test]
    fn strategies_agree(faces in arb_faces(40)) {
        let hashed = classify_with(&faces, DedupStrategy::Hash);
        let sorted = classify_with(&faces, DedupStrategy::Sort);

        let mut a: Vec<(EdgeKey<u32>, usize)> =
            hashed.edges.iter().copied().zip(hashed.incidence.iter().copied()).collect();
        a.sort();
        let b: Vec<(EdgeKey<u32>, usize)> =
            sorted.edges.iter().copied().zip(sorted.incidence.iter().copied()).collect();

        prop_assert_eq!(a, b);
        prop_assert_eq!(hashed.corner_manifold, sorted.corner_manifold);
    }

    /// Hash ids appear in first-encounter order: each new id is one past the
    /// largest id seen so far.
    #[test]
    fn hash_ids_are_first_encounter(faces in arb_faces(40)) {
        let table = unique_edges(&faces, DedupStrategy::Hash);
        let mut next = 0usize;
        for &id in &table.edge_map {
            prop_assert!(id <= next);
            if id == next {
                next += 1;
            }
        }
        prop_assert_eq!(next, table.edges.len());
    }

    /// Classification is deterministic, including edge numbering.
    #[test]
    fn classify_is_idempotent(faces in arb_faces(40)) {
        prop_assert_eq!(classify(&faces), classify(&faces));
        prop_assert_eq!(
            classify_with(&faces, DedupStrategy::Sort),
            classify_with(&faces, DedupStrategy::Sort)
        );
    }

    /// Reversing every face's winding changes nothing undirected.
    #[test]
    fn winding_does_not_matter(faces in arb_faces(40)) {
        let flipped: Vec<[u32; 3]> = faces.iter().map(|f| [f[0], f[2], f[1]]).collect();
        let a = classify_with(&faces, DedupStrategy::Sort);
        let b = classify_with(&flipped, DedupStrategy::Sort);
        prop_assert_eq!(a.edges, b.edges);
        prop_assert_eq!(a.incidence, b.incidence);
        prop_assert_eq!(a.mesh_manifold, b.mesh_manifold);
    }
}

// =============================================================================
// Fixed meshes
// =============================================================================

/// Triangulated cube: closed and manifold.
fn cube_faces() -> Vec<[u32; 3]> {
    vec![
        [0, 1, 2],
        [0, 2, 3],
        [4, 6, 5],
        [4, 7, 6],
        [0, 4, 5],
        [0, 5, 1],
        [2, 6, 7],
        [2, 7, 3],
        [0, 3, 7],
        [0, 7, 4],
        [1, 5, 6],
        [1, 6, 2],
    ]
}

#[test]
fn cube_is_closed_and_manifold() {
    let faces = cube_faces();
    let report = classify(&faces);

    assert_eq!(report.edge_count(), 18);
    assert!(report.is_closed());
    assert!(report.mesh_manifold);
    assert!(is_manifold(&faces));
}

#[test]
fn fin_on_cube_is_non_manifold() {
    let mut faces = cube_faces();
    // A fin hanging off cube edge (0, 1).
    faces.push([0, 1, 8]);
    let report = classify(&faces);

    let fin = report.find_edge(0, 1).unwrap();
    assert_eq!(report.incidence[fin], 3);
    assert_eq!(report.non_manifold_edges().map(|(id, _)| id).collect::<Vec<_>>(), vec![fin]);
    assert_eq!(report.non_manifold_corners().count(), 3);
    assert!(!is_manifold(&faces));
}
