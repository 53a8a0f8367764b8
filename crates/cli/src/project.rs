// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project type detection from marker files.
//!
//! Pluggable classifier over a root directory listing, used only to pick
//! a default extension policy when neither the config file nor CLI flags
//! set one. Drupal-style layouts keep composer.json/Gemfile under web/
//! or docroot/.

use std::path::Path;

/// Detected project language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Php,
    Ruby,
    Node,
    Docker,
    Unknown,
}

impl ProjectType {
    /// Default extension allow list for the blame check.
    ///
    /// Empty means allow all; only languages with a well-known source
    /// extension set narrow the policy.
    pub fn default_extensions(self) -> Vec<String> {
        let exts: &[&str] = match self {
            ProjectType::Php => &["php", "module", "inc", "install", "theme"],
            ProjectType::Ruby => &["rb", "rake"],
            ProjectType::Node => &["js", "jsx", "ts", "tsx"],
            ProjectType::Docker | ProjectType::Unknown => &[],
        };
        exts.iter().map(|e| e.to_string()).collect()
    }
}

fn any_exists(root: &Path, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| root.join(c).exists())
}

/// Classify the project at `root` by the marker files it carries.
pub fn detect(root: &Path) -> ProjectType {
    if any_exists(
        root,
        &["composer.json", "web/composer.json", "docroot/composer.json"],
    ) {
        ProjectType::Php
    } else if any_exists(root, &["Gemfile", "web/Gemfile", "docroot/Gemfile"]) {
        ProjectType::Ruby
    } else if root.join("package.json").exists() {
        ProjectType::Node
    } else if any_exists(root, &["docker-compose.yml", "docker-compose.yaml"]) {
        ProjectType::Docker
    } else {
        ProjectType::Unknown
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
