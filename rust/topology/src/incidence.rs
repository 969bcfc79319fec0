// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-edge incidence counting.

/// Counts how many corner-edges map to each unique edge.
///
/// The result has length `edge_count` and sums to `edge_map.len()`.
pub fn incidence_counts(edge_map: &[usize], edge_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; edge_count];
    for &id in edge_map {
        counts[id] += 1;
    }
    counts
}
