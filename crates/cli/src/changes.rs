// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changed file set resolution.
//!
//! Two modes:
//! - Staged: files staged relative to HEAD (or the empty tree in a
//!   repository with no commits yet) — pre-commit hook mode.
//! - Since: files changed since the merge-base of HEAD and an explicit
//!   reference. Using the merge-base avoids flagging files that moved on
//!   the target branch after the histories diverged.

use std::path::{Path, PathBuf};

use crate::filter::{self, FilePolicy};
use crate::git;

/// Hash of the empty tree, the comparison baseline when the repository
/// has no commits yet.
pub const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// What the working state is compared against.
#[derive(Debug, Clone, Copy)]
pub enum ChangeSource<'a> {
    /// Staged changes (pre-commit hook mode).
    Staged,
    /// Everything changed since the merge-base of HEAD and this reference.
    Since(&'a str),
}

/// Reference the diff and blame steps should run against.
///
/// Staged mode falls back to the empty tree when HEAD does not resolve.
/// An empty reference in Since mode means "nothing to do": `None`.
pub fn baseline(root: &Path, source: ChangeSource<'_>) -> Option<String> {
    match source {
        ChangeSource::Staged => {
            if git::verify_ref(root, "HEAD") {
                Some("HEAD".to_string())
            } else {
                tracing::debug!("HEAD does not resolve, comparing against the empty tree");
                Some(EMPTY_TREE.to_string())
            }
        }
        ChangeSource::Since(reference) if reference.is_empty() => None,
        ChangeSource::Since(reference) => Some(reference.to_string()),
    }
}

/// Resolve the files touched by the current commit, filtered by `policy`.
///
/// Paths come back absolute (joined onto `root`), in the order git lists
/// them. An unresolvable reference or a failed git query yields an empty
/// list, never an error.
pub fn resolve(root: &Path, source: ChangeSource<'_>, policy: &FilePolicy) -> Vec<PathBuf> {
    let listing = match source {
        ChangeSource::Staged => {
            let Some(against) = baseline(root, source) else {
                return Vec::new();
            };
            git::run(
                root,
                &["diff-index", "--cached", "--name-only", &against],
                None,
            )
        }
        ChangeSource::Since(reference) => {
            if reference.is_empty() {
                return Vec::new();
            }
            let Some(base) = git::merge_base(root, reference) else {
                return Vec::new();
            };
            git::run(root, &["diff-index", "--name-only", &base], None)
        }
    };

    listing
        .stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| root.join(line))
        .filter(|path| filter::include(path, policy))
        .collect()
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
