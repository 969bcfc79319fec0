// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corner-edge (half-edge) extraction.
//!
//! Every triangle contributes three directed edges, one per corner. The
//! sequence is face-major: corner 0, 1, 2 of face 0, then face 1, and so on.
//! Every later stage indexes into this sequence with `face * 3 + corner`.

use serde::Serialize;

use crate::keys::{CornerRef, EdgeKey, Face, VertexIndex};

/// A directed edge owned by one corner of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CornerEdge<I> {
    pub corner: CornerRef,
    pub from: I,
    pub to: I,
}

impl<I: VertexIndex> CornerEdge<I> {
    /// The undirected edge this corner-edge canonicalizes to.
    #[inline]
    pub fn key(&self) -> EdgeKey<I> {
        EdgeKey::new(self.from, self.to)
    }
}

/// Number of corner-edges in a mesh with `face_count` triangles.
#[inline]
pub fn corner_edge_count(face_count: usize) -> usize {
    face_count * 3
}

/// The directed edge leaving corner `corner` of `face`.
#[inline]
pub fn corner_edge_of<I: VertexIndex>(face: &Face<I>, corner: usize) -> (I, I) {
    (face[corner], face[(corner + 1) % 3])
}

/// Iterates the corner-edges of `faces` in face-major order.
pub fn iter_corner_edges<I: VertexIndex>(
    faces: &[Face<I>],
) -> impl ExactSizeIterator<Item = CornerEdge<I>> + '_ {
    (0..corner_edge_count(faces.len())).map(move |i| {
        let corner = CornerRef::from_flat_index(i);
        let (from, to) = corner_edge_of(&faces[corner.face], corner.corner as usize);
        CornerEdge { corner, from, to }
    })
}

/// Collects all `3m` corner-edges of `faces` in face-major order.
pub fn corner_edges<I: VertexIndex>(faces: &[Face<I>]) -> Vec<CornerEdge<I>> {
    iter_corner_edges(faces).collect()
}
