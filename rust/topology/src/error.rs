// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh validation and report export.
//!
//! The analyzer itself is total: [`classify`](crate::classify) and
//! [`is_manifold`](crate::is_manifold) never fail. Errors only arise when
//! validating raw input into a [`Mesh`](crate::Mesh) or when exporting a
//! report.

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or exporting mesh data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A flat index buffer whose length is not a multiple of 3.
    #[error("flat index buffer of length {0} does not split into triangles")]
    RaggedFaces(usize),

    /// A face repeats one of its vertex indices.
    #[error("face {face} is degenerate: vertex indices {indices} are not distinct")]
    DegenerateFace { face: usize, indices: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
