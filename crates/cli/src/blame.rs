// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blame correlation for removed lines.
//!
//! For each removed line, blame output for the file at the comparison
//! reference is searched for lines whose trailing content equals the
//! removed text. Blame attribution is the state at the reference, not
//! specific to any one removal, so the same output is searched with a
//! fresh pattern per candidate.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::git;
use crate::removed::RemovedLine;

/// One removed line traced back to its last author.
#[derive(Debug, Clone, Serialize)]
pub struct BlameMatch {
    /// File the line was removed from.
    pub file: PathBuf,
    /// Full blame line: commit, author, relative date, content.
    pub line: String,
}

/// Build the matcher for one normalized removed line.
///
/// Blame output looks like:
///
/// ```text
/// abc1234 (Jane Doe 3 days ago 1) foo bar baz
/// ```
///
/// The prefix before the parenthesized attribution group never contains
/// `(`, so `[^(]*?` skips it without eating into the group. The
/// candidate text is escaped wholesale so regex metacharacters match
/// literally; that includes `$`.
fn line_pattern(normalized: &str) -> Option<Regex> {
    let pattern = format!(r"^[^(]*?(\([^)]*\))\s*{}$", regex::escape(normalized));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!("failed to build blame pattern for {:?}: {}", normalized, e);
            None
        }
    }
}

/// Correlate removed lines against blame output for `file` at `reference`.
///
/// Whitespace-only removals are skipped before any blame call. The same
/// text can appear on several lines; every matching blame line is kept,
/// in blame output order.
pub fn correlate(
    root: &Path,
    file: &Path,
    reference: &str,
    removed: &[RemovedLine],
) -> Vec<BlameMatch> {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let rel = rel.to_string_lossy();

    let mut matches = Vec::new();
    for candidate in removed {
        if candidate.normalized.is_empty() {
            continue;
        }
        let Some(re) = line_pattern(&candidate.normalized) else {
            continue;
        };

        let blame = git::run(
            root,
            &["blame", "--date=relative", reference, "--", &rel],
            None,
        );
        if !blame.success() {
            continue;
        }

        for line in blame.stdout.lines() {
            if re.is_match(line) {
                matches.push(BlameMatch {
                    file: file.to_path_buf(),
                    line: line.to_string(),
                });
            }
        }
    }

    matches
}

#[cfg(test)]
#[path = "blame_tests.rs"]
mod tests;
