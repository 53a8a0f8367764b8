// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing.
//!
//! blamecheck.toml:
//!
//! ```toml
//! [files]
//! extensions = ["php", "module"]
//! ignore_filenames = [".min."]
//! ignore_paths = ["vendor/", "node_modules/"]
//! ```
//!
//! All tables and keys are optional; a missing config means the
//! allow-all policy (possibly narrowed by project type detection).

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::filter::FilePolicy;

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// File inclusion policy.
    #[serde(default)]
    pub files: FilePolicy,
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| Error::Config {
        message: format!("{}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
