// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end blame check pipeline.
//!
//! Resolve the changed file set, then for each file extract removed
//! lines and correlate them against blame. Single-threaded and blocking;
//! each file is independent, so nothing here shares mutable state.

use std::path::Path;

use crate::blame::{self, BlameMatch};
use crate::changes::{self, ChangeSource};
use crate::filter::FilePolicy;
use crate::removed;

/// Run the full pipeline and return all matches in processing order.
///
/// An unresolvable reference means there is nothing to compare against:
/// the result is empty, not an error.
pub fn run(root: &Path, source: ChangeSource<'_>, policy: &FilePolicy) -> Vec<BlameMatch> {
    let Some(reference) = changes::baseline(root, source) else {
        tracing::debug!("no comparison reference, nothing to do");
        return Vec::new();
    };

    let files = changes::resolve(root, source, policy);
    tracing::debug!("{} changed file(s) against {}", files.len(), reference);

    let mut matches = Vec::new();
    for file in &files {
        let candidates = removed::extract(root, file, &reference);
        tracing::debug!(
            "{}: {} removed line(s)",
            file.display(),
            candidates.len()
        );
        matches.extend(blame::correlate(root, file, &reference, &candidates));
    }

    matches
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
