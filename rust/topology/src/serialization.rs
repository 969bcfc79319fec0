// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON export and condensed summaries of manifold reports.
//!
//! The full report serializes every per-edge and per-corner array; the
//! [`ManifoldSummary`] keeps only the counts a validation pipeline needs.

use serde::{Deserialize, Serialize};

use crate::classify::ManifoldReport;
use crate::error::{Error, Result};
use crate::keys::VertexIndex;

/// Counts derived from a [`ManifoldReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManifoldSummary {
    pub faces: usize,
    pub corner_edges: usize,
    pub edges: usize,
    pub boundary_edges: usize,
    pub interior_edges: usize,
    pub non_manifold_edges: usize,
    pub non_manifold_faces: usize,
    pub manifold: bool,
    pub closed: bool,
}

impl ManifoldSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<I: VertexIndex> ManifoldReport<I> {
    pub fn summary(&self) -> ManifoldSummary {
        ManifoldSummary {
            faces: self.face_count(),
            corner_edges: self.corner_edge_count(),
            edges: self.edge_count(),
            boundary_edges: self.boundary_edges().count(),
            interior_edges: self.interior_edges().count(),
            non_manifold_edges: self.non_manifold_edges().count(),
            non_manifold_faces: self.non_manifold_faces().count(),
            manifold: self.mesh_manifold,
            closed: self.is_closed(),
        }
    }
}

impl<I: VertexIndex + Serialize> ManifoldReport<I> {
    /// Serializes the full report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl std::fmt::Display for ManifoldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Manifold Report:")?;
        writeln!(f, "  Faces: {}", self.faces)?;
        writeln!(f, "  Edges: {}", self.edges)?;
        writeln!(f)?;
        writeln!(f, "  Status:")?;
        writeln!(
            f,
            "    Edge-manifold: {}",
            if self.manifold { "Yes" } else { "No" }
        )?;
        writeln!(f, "    Closed: {}", if self.closed { "Yes" } else { "No" })?;
        writeln!(f)?;
        writeln!(f, "  Edges by incidence:")?;
        writeln!(f, "    Boundary: {}", self.boundary_edges)?;
        writeln!(f, "    Interior: {}", self.interior_edges)?;
        writeln!(f, "    Non-manifold: {}", self.non_manifold_edges)?;
        if self.non_manifold_faces > 0 {
            writeln!(f, "    Faces on non-manifold edges: {}", self.non_manifold_faces)?;
        }
        Ok(())
    }
}
