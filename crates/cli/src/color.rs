// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` flag or `NO_COLOR` env var → no color
//! 2. `--color` flag or `COLOR` env var → color
//! 3. default: color only when stdout is a TTY

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve the termcolor choice from CLI flags and environment.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if force_color || std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
