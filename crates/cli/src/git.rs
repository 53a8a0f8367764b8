// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess gateway for git queries.
//!
//! Every query shells out to `git` and blocks until it exits. A failed
//! invocation is never fatal: callers get empty stdout plus the exit
//! status and treat "no output" as "no data". Failures are still visible
//! at the tracing boundary so a misconfigured environment can be
//! diagnosed with `BLAMECHECK_LOG=debug`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output of a single git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Captured stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Process exit status (127 if git could not be spawned).
    pub status: i32,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    fn failed(status: i32) -> Self {
        Self {
            stdout: String::new(),
            status,
        }
    }
}

/// Run a git subcommand in `root`, optionally feeding `stdin`.
///
/// Non-zero exits are reported through the returned status, not as
/// errors. Stdin content is passed through byte-for-byte so output of
/// one invocation can be piped into the next.
pub fn run(root: &Path, args: &[&str], stdin: Option<&str>) -> GitOutput {
    let mut cmd = Command::new("git");
    cmd.args(args)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if stdin.is_some() {
        cmd.stdin(Stdio::piped());
    } else {
        cmd.stdin(Stdio::null());
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!("failed to spawn git {:?}: {}", args, e);
            return GitOutput::failed(127);
        }
    };

    if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
        // A write error here means git exited early; the status below
        // will reflect that.
        if let Err(e) = pipe.write_all(input.as_bytes()) {
            tracing::debug!("failed to write stdin for git {:?}: {}", args, e);
        }
    }

    let output = match child.wait_with_output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("failed to wait for git {:?}: {}", args, e);
            return GitOutput::failed(-1);
        }
    };

    let status = output.status.code().unwrap_or(-1);
    if status != 0 {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!("git {:?} exited {}: {}", args, status, stderr.trim());
    }

    GitOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        status,
    }
}

/// Resolve the repository top-level directory for `start`.
pub fn top_level(start: &Path) -> Option<PathBuf> {
    let out = run(start, &["rev-parse", "--show-toplevel"], None);
    if !out.success() {
        return None;
    }
    let line = out.stdout.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(PathBuf::from(line))
    }
}

/// Check whether `reference` resolves to a commit.
pub fn verify_ref(root: &Path, reference: &str) -> bool {
    run(root, &["rev-parse", "--verify", reference], None).success()
}

/// Most recent common ancestor of HEAD and `reference`.
pub fn merge_base(root: &Path, reference: &str) -> Option<String> {
    let out = run(root, &["merge-base", "HEAD", reference], None);
    if !out.success() {
        return None;
    }
    let base = out.stdout.trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
