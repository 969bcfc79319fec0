// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated triangle list.
//!
//! The free functions in [`classify`](crate::classify) accept any slice of
//! faces. [`Mesh`] is for callers holding untrusted input: construction
//! rejects ragged index buffers and faces that repeat a vertex.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_with, is_manifold, ManifoldReport};
use crate::error::{Error, Result};
use crate::keys::{Face, VertexIndex};
use crate::unique::DedupStrategy;

/// An owned list of non-degenerate triangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Face<I>>",
    into = "Vec<Face<I>>",
    bound(
        serialize = "I: Clone + Serialize",
        deserialize = "I: VertexIndex + Deserialize<'de>"
    )
)]
pub struct Mesh<I> {
    faces: Vec<Face<I>>,
}

impl<I: VertexIndex> Mesh<I> {
    /// Wraps `faces`, rejecting any face whose three indices are not distinct.
    pub fn new(faces: Vec<Face<I>>) -> Result<Self> {
        if let Some((face, f)) = faces
            .iter()
            .enumerate()
            .find(|(_, f)| f[0] == f[1] || f[1] == f[2] || f[2] == f[0])
        {
            return Err(Error::DegenerateFace {
                face,
                indices: format!("{f:?}"),
            });
        }
        Ok(Self { faces })
    }

    /// Builds a mesh from a flat `[a0, b0, c0, a1, b1, c1, ...]` buffer.
    pub fn from_flat(indices: &[I]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::RaggedFaces(indices.len()));
        }
        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(faces)
    }

    pub fn faces(&self) -> &[Face<I>] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn into_faces(self) -> Vec<Face<I>> {
        self.faces
    }

    pub fn classify(&self) -> ManifoldReport<I> {
        classify_with(&self.faces, DedupStrategy::default())
    }

    pub fn classify_with(&self, strategy: DedupStrategy) -> ManifoldReport<I> {
        classify_with(&self.faces, strategy)
    }

    pub fn is_manifold(&self) -> bool {
        is_manifold(&self.faces)
    }
}

impl<I> Default for Mesh<I> {
    fn default() -> Self {
        Self { faces: Vec::new() }
    }
}

impl<I: VertexIndex> TryFrom<Vec<Face<I>>> for Mesh<I> {
    type Error = Error;

    fn try_from(faces: Vec<Face<I>>) -> Result<Self> {
        Mesh::new(faces)
    }
}

impl<I> From<Mesh<I>> for Vec<Face<I>> {
    fn from(mesh: Mesh<I>) -> Self {
        mesh.faces
    }
}
