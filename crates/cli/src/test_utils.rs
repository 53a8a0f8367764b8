//! Shared unit test utilities.
//!
//! Git repository helpers for unit tests in the cli crate. Every helper
//! shells out to the real `git` binary inside a temp directory, matching
//! what the production code does.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Initialize a git repository in the temp directory.
pub fn init_git_repo(temp: &TempDir) {
    git(temp, &["init", "-b", "main"]);
    git(temp, &["config", "user.email", "test@example.com"]);
    git(temp, &["config", "user.name", "Test User"]);
}

/// Run a git command in the temp directory, panicking on spawn failure.
pub fn git(temp: &TempDir, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(temp.path())
        .output()
        .expect("Failed to run git");
}

/// Stage a file using git add.
pub fn git_add(temp: &TempDir, file: &str) {
    git(temp, &["add", file]);
}

/// Create a commit with the given message.
pub fn git_commit(temp: &TempDir, message: &str) {
    git(temp, &["commit", "-m", message]);
}

/// Create and checkout a new branch.
pub fn git_checkout_b(temp: &TempDir, branch: &str) {
    git(temp, &["checkout", "-b", branch]);
}

/// Write a file, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Write a file and stage it.
pub fn create_and_stage(temp: &TempDir, rel: &str, content: &str) {
    write_file(temp.path(), rel, content);
    git_add(temp, rel);
}

/// Write a file, stage it, and commit it.
pub fn commit_file(temp: &TempDir, rel: &str, content: &str, message: &str) {
    create_and_stage(temp, rel, content);
    git_commit(temp, message);
}
