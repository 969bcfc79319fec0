// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MeshCheck - edge-manifold validator for triangle meshes.
//!
//! Reads one or more JSON face lists (`[[a, b, c], ...]` or
//! `{"faces": [...]}`) and reports whether every edge is shared by at most
//! two triangles. With no arguments, reads stdin.
//!
//! # Environment
//!
//! - `MESHCHECK_STRATEGY` - `hash` (default) or `sort` edge numbering
//! - `MESHCHECK_OUTPUT` - `summary` (default), `json` or `quiet`
//! - `MESHCHECK_FAST` - `true` to only run the boolean check
//! - `MESHCHECK_LOG_JSON` - `true` for JSON log lines
//! - `RUST_LOG` - log filter
//!
//! # Exit codes
//!
//! - `0` - every input is edge-manifold
//! - `1` - at least one input has a non-manifold edge
//! - `2` - an input could not be read or validated

use std::process::ExitCode;

use anyhow::Context;
use meshcheck_topology::Mesh;

mod config;
mod input;

use config::{Config, OutputMode};

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,meshcheck_topology=debug".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Checks one mesh and prints its result. Returns whether it is manifold.
fn check(name: &str, mesh: &Mesh<u32>, config: &Config) -> anyhow::Result<bool> {
    if config.fast {
        let manifold = mesh.is_manifold();
        tracing::info!(input = name, faces = mesh.face_count(), manifold, "checked mesh");
        if config.output != OutputMode::Quiet {
            println!("{name}: {}", if manifold { "manifold" } else { "non-manifold" });
        }
        return Ok(manifold);
    }

    let report = mesh.classify_with(config.strategy);
    let summary = report.summary();
    tracing::info!(
        input = name,
        faces = summary.faces,
        edges = summary.edges,
        non_manifold_edges = summary.non_manifold_edges,
        manifold = summary.manifold,
        "checked mesh"
    );
    for (id, edge) in report.non_manifold_edges() {
        tracing::warn!(
            input = name,
            edge = id,
            lo = edge.lo,
            hi = edge.hi,
            incidence = report.incidence[id],
            "non-manifold edge"
        );
    }

    match config.output {
        OutputMode::Summary => print!("{name}\n{summary}"),
        OutputMode::Json => println!("{}", report.to_json()?),
        OutputMode::Quiet => {}
    }
    Ok(summary.manifold)
}

fn run(config: &Config) -> anyhow::Result<bool> {
    let inputs: Vec<&str> = if config.inputs.is_empty() {
        vec!["-"]
    } else {
        config.inputs.iter().map(String::as_str).collect()
    };

    let mut all_manifold = true;
    for path in inputs {
        let name = if path == "-" { "<stdin>" } else { path };
        let text = input::read_source(path)?;
        let mesh = input::parse_mesh(name, &text).with_context(|| format!("invalid mesh in {name}"))?;
        all_manifold &= check(name, &mesh, config)?;
    }
    Ok(all_manifold)
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_logging(config.log_json);

    tracing::debug!(
        strategy = %config.strategy,
        output = ?config.output,
        fast = config.fast,
        inputs = config.inputs.len(),
        "Starting MeshCheck"
    );

    let result = run(&config);
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Maps a run outcome to the process exit status.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}
