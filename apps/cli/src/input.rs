// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face-list input parsing.
//!
//! Accepts either a bare `[[a, b, c], ...]` array or an object with a
//! `faces` field holding one.

use std::io::Read;

use meshcheck_topology::Mesh;
use serde::Deserialize;
use thiserror::Error;

/// Input error types.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {source_name}: {err}")]
    Io {
        source_name: String,
        #[source]
        err: std::io::Error,
    },

    #[error("{source_name} is not a face list: {err}")]
    Json {
        source_name: String,
        #[source]
        err: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FaceDocument {
    Bare(Vec<[u32; 3]>),
    Wrapped { faces: Vec<[u32; 3]> },
}

/// Parses a JSON document into a validated mesh.
pub fn parse_mesh(source_name: &str, text: &str) -> anyhow::Result<Mesh<u32>> {
    let doc: FaceDocument = serde_json::from_str(text).map_err(|err| InputError::Json {
        source_name: source_name.to_string(),
        err,
    })?;
    let faces = match doc {
        FaceDocument::Bare(faces) | FaceDocument::Wrapped { faces } => faces,
    };
    Ok(Mesh::new(faces)?)
}

/// Reads a file, or stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, InputError> {
    let result = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|err| InputError::Io {
        source_name: path.to_string(),
        err,
    })
}
