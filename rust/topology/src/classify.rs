// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge-manifold classification.
//!
//! An undirected edge is manifold when at most two corner-edges map to it:
//! one is a boundary edge, two is an ordinary interior edge, three or more
//! make the surface non-manifold along that edge. Corner and whole-mesh
//! verdicts derive from the per-edge verdict.
//!
//! [`classify`] materializes every intermediate artifact in a
//! [`ManifoldReport`]. [`is_manifold`] answers only the whole-mesh question
//! by scanning sorted edge records, without building an edge map.

use serde::Serialize;

use crate::half_edge::corner_edge_count;
use crate::incidence::incidence_counts;
use crate::keys::{CornerRef, EdgeKey, Face, VertexIndex};
use crate::unique::{sorted_edge_records, unique_edges, DedupStrategy, EdgeRecord};

/// Largest incidence count that still counts as manifold.
pub const MAX_MANIFOLD_INCIDENCE: usize = 2;

/// Topological role of an edge, derived from its incidence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    /// Touched by exactly one corner.
    Boundary,
    /// Touched by exactly two corners.
    Interior,
    /// Touched by three or more corners.
    NonManifold,
}

impl EdgeClass {
    pub fn from_incidence(count: usize) -> Self {
        match count {
            0 | 1 => EdgeClass::Boundary,
            2 => EdgeClass::Interior,
            _ => EdgeClass::NonManifold,
        }
    }

    pub fn is_manifold(&self) -> bool {
        !matches!(self, EdgeClass::NonManifold)
    }
}

/// Manifold flag for every unique edge: `count <= 2`.
pub fn classify_edges(counts: &[usize]) -> Vec<bool> {
    counts.iter().map(|&c| c <= MAX_MANIFOLD_INCIDENCE).collect()
}

/// Full edge-manifold breakdown of a triangle mesh.
///
/// Corner-indexed data uses the face-major layout `face * 3 + corner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifoldReport<I> {
    /// Unique undirected edges, indexed by edge id.
    pub edges: Vec<EdgeKey<I>>,
    /// Edge id of every corner-edge.
    pub edge_map: Vec<usize>,
    /// Number of corner-edges on each edge.
    pub incidence: Vec<usize>,
    /// `incidence[e] <= 2` for each edge.
    pub edge_manifold: Vec<bool>,
    /// Per face, per corner: the manifold flag of that corner's edge.
    pub corner_manifold: Vec<[bool; 3]>,
    /// Whether every edge is manifold.
    pub mesh_manifold: bool,
    /// Strategy that numbered the edges.
    pub strategy: DedupStrategy,
}

/// Classifies `faces` with the default hash-based deduplicator.
///
/// # Example
///
/// ```
/// use meshcheck_topology::classify;
///
/// let report = classify(&[[0u32, 1, 2], [0, 1, 3], [0, 1, 4]]);
/// assert!(!report.mesh_manifold);
/// assert_eq!(report.non_manifold_edges().count(), 1);
/// ```
pub fn classify<I: VertexIndex>(faces: &[Face<I>]) -> ManifoldReport<I> {
    classify_with(faces, DedupStrategy::default())
}

/// Classifies `faces`, numbering edges with `strategy`.
pub fn classify_with<I: VertexIndex>(
    faces: &[Face<I>],
    strategy: DedupStrategy,
) -> ManifoldReport<I> {
    let table = unique_edges(faces, strategy);
    let incidence = incidence_counts(&table.edge_map, table.edge_count());
    let edge_manifold = classify_edges(&incidence);

    let corner_manifold: Vec<[bool; 3]> = table
        .edge_map
        .chunks_exact(3)
        .map(|ids| {
            [
                edge_manifold[ids[0]],
                edge_manifold[ids[1]],
                edge_manifold[ids[2]],
            ]
        })
        .collect();
    let mesh_manifold = edge_manifold.iter().all(|&m| m);

    tracing::debug!(
        faces = faces.len(),
        edges = table.edge_count(),
        strategy = %strategy,
        manifold = mesh_manifold,
        "classified mesh"
    );

    ManifoldReport {
        edges: table.edges,
        edge_map: table.edge_map,
        incidence,
        edge_manifold,
        corner_manifold,
        mesh_manifold,
        strategy,
    }
}

/// Whether every edge of `faces` is touched by at most two corners.
///
/// Agrees with `classify(faces).mesh_manifold` on every input, but only sorts
/// edge records and looks for three consecutive records with the same key.
pub fn is_manifold<I: VertexIndex>(faces: &[Face<I>]) -> bool {
    let records = sorted_edge_records(faces);
    match find_triple(&records) {
        Some(record) => {
            tracing::trace!(
                corner = %record.corner,
                edge = ?record.key.as_tuple(),
                "non-manifold edge found"
            );
            false
        }
        None => true,
    }
}

/// First record that starts a run of at least three equal keys.
fn find_triple<I: VertexIndex>(records: &[EdgeRecord<I>]) -> Option<&EdgeRecord<I>> {
    records
        .windows(3)
        .find(|w| w[0].key == w[1].key && w[1].key == w[2].key)
        .map(|w| &w[0])
}

impl<I: VertexIndex> ManifoldReport<I> {
    pub fn face_count(&self) -> usize {
        self.corner_manifold.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn corner_edge_count(&self) -> usize {
        corner_edge_count(self.face_count())
    }

    /// Edge id of the corner-edge leaving corner `corner` of face `face`.
    ///
    /// Returns `None` if the face or corner is out of range.
    pub fn edge_id(&self, face: usize, corner: usize) -> Option<usize> {
        if corner >= 3 {
            return None;
        }
        face.checked_mul(3)
            .and_then(|base| base.checked_add(corner))
            .and_then(|i| self.edge_map.get(i))
            .copied()
    }

    /// Edge id and key for a corner.
    pub fn edge_of(&self, corner: CornerRef) -> Option<(usize, EdgeKey<I>)> {
        let id = self.edge_id(corner.face, corner.corner as usize)?;
        self.edges.get(id).map(|&key| (id, key))
    }

    /// Classification of a single edge.
    pub fn edge_class(&self, id: usize) -> Option<EdgeClass> {
        self.incidence.get(id).map(|&c| EdgeClass::from_incidence(c))
    }

    /// Looks up the edge id for a vertex pair, in either direction.
    pub fn find_edge(&self, a: I, b: I) -> Option<usize> {
        let key = EdgeKey::new(a, b);
        self.edges.iter().position(|e| *e == key)
    }

    fn edges_with(&self, class: EdgeClass) -> impl Iterator<Item = (usize, EdgeKey<I>)> + '_ {
        self.edges
            .iter()
            .zip(&self.incidence)
            .enumerate()
            .filter(move |(_, (_, count))| EdgeClass::from_incidence(**count) == class)
            .map(|(id, (&key, _))| (id, key))
    }

    /// Edges touched by exactly one corner.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (usize, EdgeKey<I>)> + '_ {
        self.edges_with(EdgeClass::Boundary)
    }

    /// Edges touched by exactly two corners.
    pub fn interior_edges(&self) -> impl Iterator<Item = (usize, EdgeKey<I>)> + '_ {
        self.edges_with(EdgeClass::Interior)
    }

    /// Edges touched by three or more corners.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = (usize, EdgeKey<I>)> + '_ {
        self.edges_with(EdgeClass::NonManifold)
    }

    /// Corners whose edge is non-manifold, in face-major order.
    pub fn non_manifold_corners(&self) -> impl Iterator<Item = CornerRef> + '_ {
        self.corner_manifold
            .iter()
            .enumerate()
            .flat_map(|(face, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, ok)| !**ok)
                    .map(move |(corner, _)| CornerRef::new(face, corner as u8))
            })
    }

    /// Faces with at least one non-manifold corner.
    pub fn non_manifold_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.corner_manifold
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|&ok| !ok))
            .map(|(face, _)| face)
    }

    /// Whether the surface has no boundary edges.
    pub fn is_closed(&self) -> bool {
        self.incidence.iter().all(|&c| c >= 2)
    }
}
