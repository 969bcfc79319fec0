// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables and arguments.

use meshcheck_topology::DedupStrategy;

/// What to print for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable summary block.
    Summary,
    /// Full report as JSON.
    Json,
    /// Nothing; only the exit code.
    Quiet,
}

impl OutputMode {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Some(OutputMode::Summary),
            "json" => Some(OutputMode::Json),
            "quiet" => Some(OutputMode::Quiet),
            _ => None,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Edge numbering strategy for full reports.
    pub strategy: DedupStrategy,
    /// Output format.
    pub output: OutputMode,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    /// Skip the full report and only run the boolean check.
    pub fast: bool,
    /// Input files; empty means stdin.
    pub inputs: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables and positional arguments.
    pub fn from_env() -> Self {
        Self::from_parts(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    fn from_parts<F, A>(var: F, args: A) -> Self
    where
        F: Fn(&str) -> Option<String>,
        A: IntoIterator<Item = String>,
    {
        Self {
            strategy: var("MESHCHECK_STRATEGY")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            output: var("MESHCHECK_OUTPUT")
                .and_then(|s| OutputMode::parse(&s))
                .unwrap_or(OutputMode::Summary),
            log_json: var("MESHCHECK_LOG_JSON")
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            fast: var("MESHCHECK_FAST")
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            inputs: args.into_iter().collect(),
        }
    }
}
