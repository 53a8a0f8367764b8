// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File inclusion policy.
//!
//! A [`FilePolicy`] is a value, not behavior: inclusion is the logical
//! AND of three independent exclusion predicates (extension allow list,
//! ignored filename substrings, ignored path substrings), plus an
//! existence check. Files that vanished from disk cannot be blamed and
//! are dropped silently.

use std::path::Path;

use serde::Deserialize;

/// Which files the blame check looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilePolicy {
    /// Allowed extensions (empty = allow all).
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Skip files whose name contains any of these substrings.
    #[serde(default)]
    pub ignore_filenames: Vec<String>,

    /// Skip files whose full path contains any of these substrings.
    #[serde(default)]
    pub ignore_paths: Vec<String>,
}

impl FilePolicy {
    /// Allow-all policy.
    pub fn allow_all() -> Self {
        Self::default()
    }

    fn allows_extension(&self, ext: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|e| e == ext)
    }

    fn ignores_filename(&self, name: &str) -> bool {
        self.ignore_filenames.iter().any(|s| name.contains(s.as_str()))
    }

    fn ignores_path(&self, path: &str) -> bool {
        self.ignore_paths.iter().any(|s| path.contains(s.as_str()))
    }
}

/// Extension as the substring after the last `.` in the filename.
///
/// Unlike `Path::extension`, a leading-dot name like `.gitignore` counts
/// as having extension `gitignore`.
fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Decide whether `path` should be checked under `policy`.
pub fn include(path: &Path, policy: &FilePolicy) -> bool {
    if !path.exists() {
        return false;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let full = path.to_string_lossy();

    policy.allows_extension(extension_of(&name))
        && !policy.ignores_filename(&name)
        && !policy.ignores_path(&full)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
