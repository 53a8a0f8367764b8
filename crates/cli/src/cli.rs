// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A pre-commit tool that blames removed lines on their last authors
#[derive(Parser)]
#[command(name = "blamecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BLAMECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Blame removed lines against their last authors
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Repository path (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Compare against a git ref (e.g., main, HEAD~1) instead of staged changes
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Check only staged changes (pre-commit hook mode; the default)
    #[arg(long)]
    pub staged: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Only check files with this extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files whose name contains this substring (repeatable)
    #[arg(long = "ignore-filename", value_name = "STR")]
    pub ignore_filenames: Vec<String>,

    /// Skip files whose path contains this substring (repeatable)
    #[arg(long = "ignore-path", value_name = "STR")]
    pub ignore_paths: Vec<String>,

    /// Exit non-zero when removed lines were attributed
    #[arg(long)]
    pub strict: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
