// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end pipeline tests against real repositories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use tempfile::TempDir;

use super::*;
use crate::test_utils::{commit_file, create_and_stage, init_git_repo, write_file};

#[test]
fn attributes_removed_line_against_earlier_reference() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "config.txt", "value = 1\n", "chore: set value");
    commit_file(&temp, "config.txt", "value = 2\n", "chore: bump value");

    // Against the commit before the change: the removal of "value = 1"
    // traces back to the commit that wrote it.
    let matches = run(
        temp.path(),
        ChangeSource::Since("HEAD~1"),
        &FilePolicy::allow_all(),
    );
    assert_eq!(matches.len(), 1);
    assert!(matches[0].line.ends_with("value = 1"));
    assert!(matches[0].line.contains("Test User"));

    // Against the commit after the change: nothing was removed.
    let matches = run(
        temp.path(),
        ChangeSource::Since("HEAD"),
        &FilePolicy::allow_all(),
    );
    assert!(matches.is_empty());
}

#[test]
fn staged_mode_blames_staged_removals() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.txt", "doomed line\nsafe line\n", "initial");
    create_and_stage(&temp, "app.txt", "safe line\n");

    let matches = run(temp.path(), ChangeSource::Staged, &FilePolicy::allow_all());
    assert_eq!(matches.len(), 1);
    assert!(matches[0].line.ends_with("doomed line"));
}

#[test]
fn empty_reference_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.txt", "content\n", "initial");

    let matches = run(temp.path(), ChangeSource::Since(""), &FilePolicy::allow_all());
    assert!(matches.is_empty());
}

#[test]
fn fresh_repository_produces_no_matches() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_and_stage(&temp, "first.txt", "brand new\n");

    // Everything is an addition against the empty tree; nothing was
    // removed, so nothing can be blamed.
    let matches = run(temp.path(), ChangeSource::Staged, &FilePolicy::allow_all());
    assert!(matches.is_empty());
}

#[test]
fn policy_excludes_files_from_the_pipeline() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.php", "old php\n", "initial php");
    commit_file(&temp, "notes.txt", "old notes\n", "initial notes");
    create_and_stage(&temp, "app.php", "new php\n");
    create_and_stage(&temp, "notes.txt", "new notes\n");

    let policy = FilePolicy {
        extensions: vec!["php".into()],
        ..Default::default()
    };
    let matches = run(temp.path(), ChangeSource::Staged, &policy);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].file.ends_with("app.php"));
}

#[test]
fn matches_across_files_keep_processing_order() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "a.txt", "alpha line\n", "add a");
    commit_file(&temp, "b.txt", "beta line\n", "add b");
    write_file(temp.path(), "a.txt", "changed\n");
    write_file(temp.path(), "b.txt", "changed\n");
    crate::test_utils::git_add(&temp, "a.txt");
    crate::test_utils::git_add(&temp, "b.txt");

    let matches = run(temp.path(), ChangeSource::Staged, &FilePolicy::allow_all());
    assert_eq!(matches.len(), 2);
    assert!(matches[0].file.ends_with("a.txt"));
    assert!(matches[1].file.ends_with("b.txt"));
}
