// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for blame matches.
//!
//! Text output is the presentation boundary: one attribution line per
//! match, grouped under a relative file header. JSON output serializes
//! the match list directly for programmatic consumers.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::blame::BlameMatch;

/// Render matches as plain text, without color.
pub fn render_text(root: &Path, matches: &[BlameMatch]) -> String {
    let mut out = String::new();
    let mut last_file: Option<&Path> = None;

    for m in matches {
        if last_file != Some(m.file.as_path()) {
            if last_file.is_some() {
                out.push('\n');
            }
            let rel = m.file.strip_prefix(root).unwrap_or(&m.file);
            out.push_str(&format!("{}:\n", rel.display()));
            last_file = Some(m.file.as_path());
        }
        out.push_str(&format!("  {}\n", m.line));
    }

    out
}

/// Write matches as colored text: file headers bold, attribution lines
/// yellow. Color is a terminal concern only; the content matches
/// [`render_text`].
pub fn write_text<W: WriteColor>(
    w: &mut W,
    root: &Path,
    matches: &[BlameMatch],
) -> std::io::Result<()> {
    let mut header = ColorSpec::new();
    header.set_bold(true);
    let mut attribution = ColorSpec::new();
    attribution.set_fg(Some(Color::Yellow));

    let mut last_file: Option<&Path> = None;
    for m in matches {
        if last_file != Some(m.file.as_path()) {
            if last_file.is_some() {
                writeln!(w)?;
            }
            let rel = m.file.strip_prefix(root).unwrap_or(&m.file);
            w.set_color(&header)?;
            writeln!(w, "{}:", rel.display())?;
            w.reset()?;
            last_file = Some(m.file.as_path());
        }
        w.set_color(&attribution)?;
        writeln!(w, "  {}", m.line)?;
        w.reset()?;
    }

    Ok(())
}

/// Serialize matches as a JSON array of `{file, line}` objects.
pub fn render_json(matches: &[BlameMatch]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(matches)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
