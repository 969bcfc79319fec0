// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MeshCheck Topology
//!
//! Edge-manifold classification for triangle meshes.
//!
//! Given a list of triangles over a shared vertex set, this crate derives
//! the undirected edge set, maps every triangle corner to its edge, counts
//! how many corners touch each edge, and flags edges touched by three or more
//! corners as non-manifold.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`half_edge`]: one directed corner-edge per face corner, face-major.
//! 2. [`unique`]: canonical [`EdgeKey`]s, deduplicated by hashing or sorting.
//! 3. [`incidence`]: corner count per unique edge.
//! 4. [`classify`](mod@classify): per-edge, per-corner and whole-mesh verdicts.
//!
//! Every function is pure and generic over the vertex index type.
//!
//! ```
//! use meshcheck_topology::{classify, is_manifold};
//!
//! let faces = [[0u32, 1, 2], [1, 0, 3]];
//! let report = classify(&faces);
//!
//! assert!(report.mesh_manifold);
//! assert_eq!(report.interior_edges().count(), 1);
//! assert!(is_manifold(&faces));
//! ```

pub mod classify;
pub mod error;
pub mod half_edge;
pub mod incidence;
pub mod keys;
pub mod mesh;
pub mod serialization;
pub mod unique;

pub use classify::{classify, classify_with, is_manifold, EdgeClass, ManifoldReport};
pub use error::{Error, Result};
pub use half_edge::{corner_edges, CornerEdge};
pub use keys::{CornerRef, EdgeKey, Face, VertexIndex};
pub use mesh::Mesh;
pub use serialization::ManifoldSummary;
pub use unique::{unique_edges, DedupStrategy, EdgeTable};
