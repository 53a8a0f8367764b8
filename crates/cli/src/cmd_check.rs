// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::Path;

use termcolor::StandardStream;

use blamecheck::changes::ChangeSource;
use blamecheck::cli::{CheckArgs, Cli, OutputFormat};
use blamecheck::color::resolve_color;
use blamecheck::config::{self, Config};
use blamecheck::discovery;
use blamecheck::error::{Error, ExitCode};
use blamecheck::filter::FilePolicy;
use blamecheck::{git, project, report, runner};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    if args.staged && args.base.is_some() {
        eprintln!("--staged and --base cannot be used together");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir()?;
    let start = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd.clone(),
    };

    // Everything downstream runs relative to the repository top level,
    // since diff-index paths come back relative to it.
    let root = git::top_level(&start).ok_or_else(|| Error::NotARepository(start.clone()))?;

    let config = load_config(cli, &start)?;
    let policy = build_policy(&root, args, config);
    tracing::debug!("file policy: {:?}", policy);

    let source = match args.base.as_deref() {
        Some(reference) => ChangeSource::Since(reference),
        None => ChangeSource::Staged,
    };

    let matches = runner::run(&root, source, &policy);

    match args.output {
        OutputFormat::Json => {
            println!("{}", report::render_json(&matches)?);
        }
        OutputFormat::Text if matches.is_empty() => {}
        OutputFormat::Text => {
            let choice = resolve_color(args.color, args.no_color);
            let mut stdout = StandardStream::stdout(choice);
            report::write_text(&mut stdout, &root, &matches)?;
        }
    }

    if args.strict && !matches.is_empty() {
        Ok(ExitCode::MatchesFound)
    } else {
        Ok(ExitCode::Success)
    }
}

fn load_config(cli: &Cli, start: &Path) -> anyhow::Result<Config> {
    match discovery::resolve_config(cli.config.as_deref(), start)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load(&path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Combine config, CLI overrides, and project type defaults into the
/// effective policy. CLI flags replace the corresponding config list;
/// when no extension policy is set anywhere, the detected project type
/// supplies one.
fn build_policy(root: &Path, args: &CheckArgs, config: Config) -> FilePolicy {
    let mut policy = config.files;

    if !args.extensions.is_empty() {
        policy.extensions = args.extensions.clone();
    }
    if !args.ignore_filenames.is_empty() {
        policy.ignore_filenames = args.ignore_filenames.clone();
    }
    if !args.ignore_paths.is_empty() {
        policy.ignore_paths = args.ignore_paths.clone();
    }

    if policy.extensions.is_empty() {
        let project_type = project::detect(root);
        let defaults = project_type.default_extensions();
        if !defaults.is_empty() {
            tracing::debug!(
                "detected {:?} project, defaulting extensions to {:?}",
                project_type,
                defaults
            );
            policy.extensions = defaults;
        }
    }

    policy
}
