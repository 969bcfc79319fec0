// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types shared by every stage of the analyzer.
//!
//! Vertex indices are generic over [`VertexIndex`]: the algorithm only needs
//! index equality, a total order, and hashing, so any integer width works.
//! Corners are always addressed explicitly through [`CornerRef`] rather than
//! through a flattened index the caller would have to decode.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An integer type usable as a vertex index.
pub trait VertexIndex: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> VertexIndex for T {}

/// A triangle as three vertex indices, in winding order.
pub type Face<I> = [I; 3];

/// One of the three vertex slots of a face.
///
/// Corner `c` owns the directed edge from `face[c]` to `face[(c + 1) % 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CornerRef {
    pub face: usize,
    pub corner: u8,
}

impl CornerRef {
    pub fn new(face: usize, corner: u8) -> Self {
        debug_assert!(corner < 3, "corner {corner} out of range");
        Self { face, corner }
    }

    /// Position of this corner in the face-major corner-edge sequence.
    #[inline]
    pub fn flat_index(&self) -> usize {
        self.face * 3 + self.corner as usize
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    #[inline]
    pub fn from_flat_index(index: usize) -> Self {
        Self {
            face: index / 3,
            corner: (index % 3) as u8,
        }
    }
}

impl std::fmt::Display for CornerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}.c{}", self.face, self.corner)
    }
}

/// An undirected edge with its endpoints sorted so that `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey<I> {
    pub lo: I,
    pub hi: I,
}

impl<I: VertexIndex> EdgeKey<I> {
    /// Canonicalizes a directed edge. `new(a, b) == new(b, a)`.
    #[inline]
    pub fn new(a: I, b: I) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn as_tuple(&self) -> (I, I) {
        (self.lo, self.hi)
    }

    pub fn contains(&self, v: I) -> bool {
        self.lo == v || self.hi == v
    }
}

impl<I: VertexIndex> From<(I, I)> for EdgeKey<I> {
    fn from((a, b): (I, I)) -> Self {
        EdgeKey::new(a, b)
    }
}
