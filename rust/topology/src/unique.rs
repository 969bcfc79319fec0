// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Undirected edge deduplication.
//!
//! Collapses the `3m` corner-edges of a mesh into its unique undirected edges
//! and records, for every corner-edge, which unique edge it maps to.
//!
//! Two strategies produce the same edge *set*:
//!
//! - [`DedupStrategy::Hash`] numbers edges in first-encounter order along the
//!   face-major corner-edge sequence.
//! - [`DedupStrategy::Sort`] numbers edges in lexicographic key order.
//!
//! Both are deterministic, so identical input always yields identical ids.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::half_edge::{corner_edge_count, iter_corner_edges, CornerEdge};
use crate::keys::{CornerRef, EdgeKey, Face, VertexIndex};

/// How unique edges are discovered and numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupStrategy {
    /// Hash map keyed by [`EdgeKey`]; ids in first-encounter order.
    #[default]
    Hash,
    /// Stable sort of [`EdgeRecord`]s; ids in lexicographic key order.
    Sort,
}

impl DedupStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DedupStrategy::Hash => "hash",
            DedupStrategy::Sort => "sort",
        }
    }
}

impl std::fmt::Display for DedupStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DedupStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(DedupStrategy::Hash),
            "sort" => Ok(DedupStrategy::Sort),
            other => Err(format!("unknown dedup strategy: {other}")),
        }
    }
}

/// Unique undirected edges plus the corner-edge → edge id map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTable<I> {
    /// Unique edges, indexed by edge id.
    pub edges: Vec<EdgeKey<I>>,
    /// `edge_map[face * 3 + corner]` is the edge id of that corner-edge.
    pub edge_map: Vec<usize>,
}

impl<I> EdgeTable<I> {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A canonical edge key tagged with the corner it came from.
///
/// Sorting a contiguous slice of these is the shared core of the sort-based
/// deduplicator and of the boolean fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<I> {
    pub key: EdgeKey<I>,
    pub corner: CornerRef,
}

/// Builds one [`EdgeRecord`] per corner-edge and stable-sorts them by key.
///
/// Records sharing a key keep their face-major order.
pub fn sorted_edge_records<I: VertexIndex>(faces: &[Face<I>]) -> Vec<EdgeRecord<I>> {
    let mut records = Vec::with_capacity(corner_edge_count(faces.len()));
    records.extend(iter_corner_edges(faces).map(|ce| EdgeRecord {
        key: ce.key(),
        corner: ce.corner,
    }));
    records.sort_by(|a, b| a.key.cmp(&b.key));
    records
}

/// Deduplicates the corner-edges of `faces` with the given strategy.
pub fn unique_edges<I: VertexIndex>(faces: &[Face<I>], strategy: DedupStrategy) -> EdgeTable<I> {
    match strategy {
        DedupStrategy::Hash => dedup_hashed(iter_corner_edges(faces)),
        DedupStrategy::Sort => dedup_sorted(&sorted_edge_records(faces)),
    }
}

/// Hash-based deduplication over an already extracted corner-edge sequence.
///
/// `corner_edges` must be in face-major order; position `i` in the sequence
/// becomes position `i` in the edge map.
pub fn dedup_hashed<I, It>(corner_edges: It) -> EdgeTable<I>
where
    I: VertexIndex,
    It: IntoIterator<Item = CornerEdge<I>>,
{
    let iter = corner_edges.into_iter();
    let (lower, _) = iter.size_hint();

    let mut ids: FxHashMap<EdgeKey<I>, usize> = FxHashMap::default();
    ids.reserve(lower / 2);
    let mut edges = Vec::with_capacity(lower / 2);
    let mut edge_map = Vec::with_capacity(lower);

    for ce in iter {
        let key = ce.key();
        let id = *ids.entry(key).or_insert_with(|| {
            edges.push(key);
            edges.len() - 1
        });
        edge_map.push(id);
    }

    EdgeTable { edges, edge_map }
}

/// Sort-based deduplication over records from [`sorted_edge_records`].
///
/// Each run of equal keys becomes one edge; ids are scattered back to the
/// edge map by each record's corner.
pub fn dedup_sorted<I: VertexIndex>(records: &[EdgeRecord<I>]) -> EdgeTable<I> {
    let mut edges: Vec<EdgeKey<I>> = Vec::new();
    let mut edge_map = vec![0usize; records.len()];

    for record in records {
        if edges.last() != Some(&record.key) {
            edges.push(record.key);
        }
        edge_map[record.corner.flat_index()] = edges.len() - 1;
    }

    EdgeTable { edges, edge_map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::half_edge::corner_edges;

    fn check_map_invariant(faces: &[[u32; 3]], table: &EdgeTable<u32>) {
        let ces = corner_edges(faces);
        assert_eq!(table.edge_map.len(), ces.len());
        for (i, ce) in ces.iter().enumerate() {
            assert_eq!(table.edges[table.edge_map[i]], ce.key(), "corner-edge {i}");
        }
    }

    #[test]
    fn hash_ids_follow_first_encounter() {
        let faces = [[0u32, 1, 2], [1, 0, 3]];
        let table = unique_edges(&faces, DedupStrategy::Hash);

        let expected: Vec<_> = [(0, 1), (1, 2), (0, 2), (0, 3), (1, 3)]
            .into_iter()
            .map(EdgeKey::from)
            .collect();
        assert_eq!(table.edges, expected);
        assert_eq!(table.edge_map, vec![0, 1, 2, 0, 3, 4]);
        check_map_invariant(&faces, &table);
    }

    #[test]
    fn sort_ids_follow_key_order() {
        let faces = [[3u32, 1, 2], [1, 0, 3]];
        let table = unique_edges(&faces, DedupStrategy::Sort);

        let keys: Vec<_> = table.edges.iter().map(EdgeKey::as_tuple).collect();
        assert_eq!(keys, vec![(0, 1), (0, 3), (1, 2), (1, 3), (2, 3)]);
        check_map_invariant(&faces, &table);
    }

    #[test]
    fn strategies_agree_on_edge_set() {
        let faces = [[0u32, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2], [0, 1, 4]];
        let hashed = unique_edges(&faces, DedupStrategy::Hash);
        let sorted = unique_edges(&faces, DedupStrategy::Sort);

        let mut a = hashed.edges.clone();
        a.sort();
        assert_eq!(a, sorted.edges);
        check_map_invariant(&faces, &hashed);
        check_map_invariant(&faces, &sorted);
    }

    #[test]
    fn sorted_records_keep_face_major_ties() {
        let faces = [[0u32, 1, 2], [1, 0, 3], [0, 1, 4]];
        let records = sorted_edge_records(&faces);

        let shared: Vec<_> = records
            .iter()
            .filter(|r| r.key == EdgeKey::new(0, 1))
            .map(|r| r.corner)
            .collect();
        assert_eq!(
            shared,
            vec![CornerRef::new(0, 0), CornerRef::new(1, 0), CornerRef::new(2, 0)]
        );
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let faces: [[u32; 3]; 0] = [];
        for strategy in [DedupStrategy::Hash, DedupStrategy::Sort] {
            let table = unique_edges(&faces, strategy);
            assert_eq!(table.edge_count(), 0);
            assert!(table.edge_map.is_empty());
        }
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("SORT".parse::<DedupStrategy>(), Ok(DedupStrategy::Sort));
        assert_eq!("hash".parse::<DedupStrategy>(), Ok(DedupStrategy::Hash));
        assert!("tree".parse::<DedupStrategy>().is_err());
        assert_eq!(DedupStrategy::default().to_string(), "hash");
    }
}
