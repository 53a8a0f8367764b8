// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Removed line extraction from unified diffs.

use std::path::Path;

use crate::git;

/// A line deleted from the old version of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedLine {
    /// Text as it appeared in the diff, removal marker stripped.
    pub raw: String,
    /// Whitespace-collapsed form used for blame matching.
    pub normalized: String,
}

impl RemovedLine {
    fn new(raw: String) -> Self {
        let normalized = normalize_whitespace(&raw);
        Self { raw, normalized }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract every removed line from the diff of `file` against `reference`.
///
/// A failed diff yields no candidates, never an error.
pub fn extract(root: &Path, file: &Path, reference: &str) -> Vec<RemovedLine> {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let diff = git::run(
        root,
        &["diff", reference, "--", &rel.to_string_lossy()],
        None,
    );
    removed_lines(&diff.stdout)
}

/// Pull removed lines out of unified diff text.
///
/// Only `-` lines inside hunks count. Header lines (`diff`, `index`,
/// `---`, `+++`) precede the first `@@` and never leak through as
/// removed content; a `diff` line between files closes the hunk again.
/// The leading marker and any spaces right after it are stripped.
pub fn removed_lines(diff: &str) -> Vec<RemovedLine> {
    let mut out = Vec::new();
    let mut in_hunk = false;

    for line in diff.lines() {
        if line.starts_with("@@") {
            in_hunk = true;
            continue;
        }
        if line.starts_with("diff ") {
            in_hunk = false;
            continue;
        }
        if !in_hunk {
            continue;
        }
        if let Some(text) = line.strip_prefix('-') {
            out.push(RemovedLine::new(text.trim_start_matches(' ').to_string()));
        }
    }

    out
}

#[cfg(test)]
#[path = "removed_tests.rs"]
mod tests;
