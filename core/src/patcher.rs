#![deny(missing_docs)]

//! # Shader Patching
//!
//! Inserts a `#define PI` line into shader sources that reference `PI`.
//! Decisions are made with plain substring matching on whole lines; the shader
//! language itself is never parsed. A patched file gains exactly one line and
//! keeps every other byte (including `\r\n` and lone `\r` terminators) as it was.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Substring whose presence anywhere in a line marks a file as needing `PI`.
pub const PI_MARKER: &str = "PI";

/// Substring marking a uniform declaration line.
pub const UNIFORM_MARKER: &str = "uniform";

/// The exact definition inserted after the last uniform line.
pub const PI_DEFINE: &str = "#define PI 3.1415926535897932384626433832795";

/// Knobs for a single patch operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Treat files that already `#define PI` as up to date.
    ///
    /// Off by default: re-running on a patched file inserts a second definition.
    pub skip_defined: bool,

    /// Compute the outcome without writing anything back.
    pub dry_run: bool,
}

/// What the patcher decided for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No line contains `PI`.
    NoMarker,
    /// `PI` is referenced but no line contains `uniform`.
    NoUniform,
    /// `PI` is already defined (only with `skip_defined`).
    AlreadyDefined,
    /// The definition goes at line `index`; `content` is the full new source.
    Inserted {
        /// Zero-based line index of the inserted definition.
        index: usize,
        /// The patched source text.
        content: String,
    },
}

impl PatchOutcome {
    /// Whether the source was (or, in a dry run, would be) rewritten.
    pub fn is_modified(&self) -> bool {
        matches!(self, PatchOutcome::Inserted { .. })
    }
}

/// Splits a source into lines, each keeping its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_lines(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
            b'\r' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(&source[start..end]);
        start = end;
        i = end;
    }

    if start < source.len() {
        lines.push(&source[start..]);
    }

    lines
}

/// True if any line contains the `PI` marker.
pub fn has_marker(lines: &[&str]) -> bool {
    lines.iter().any(|line| line.contains(PI_MARKER))
}

/// True if a line already reads `#define PI ...`.
pub fn has_pi_define(lines: &[&str]) -> bool {
    lines.iter().any(|line| {
        let mut tokens = line.split_whitespace();
        tokens.next() == Some("#define") && tokens.next() == Some(PI_MARKER)
    })
}

/// Index right after the last line containing `uniform`, if any.
pub fn find_insertion_index(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .rposition(|line| line.contains(UNIFORM_MARKER))
        .map(|i| i + 1)
}

/// Decides whether `source` needs a `PI` definition and builds the patched text.
pub fn patch_source(source: &str, options: &PatchOptions) -> PatchOutcome {
    let lines = split_lines(source);

    if !has_marker(&lines) {
        return PatchOutcome::NoMarker;
    }

    if options.skip_defined && has_pi_define(&lines) {
        return PatchOutcome::AlreadyDefined;
    }

    let Some(index) = find_insertion_index(&lines) else {
        return PatchOutcome::NoUniform;
    };

    let mut content = String::with_capacity(source.len() + PI_DEFINE.len() + 2);
    for line in &lines[..index] {
        content.push_str(line);
    }
    // A trailing uniform line without a terminator would otherwise swallow the define.
    if !content.ends_with(|c| c == '\n' || c == '\r') {
        content.push('\n');
    }
    content.push_str(PI_DEFINE);
    content.push('\n');
    for line in &lines[index..] {
        content.push_str(line);
    }

    PatchOutcome::Inserted { index, content }
}

/// Patches one shader file in place.
///
/// The file is read fully, patched in memory and only then overwritten, so a
/// failure leaves it untouched. No backup is kept.
pub fn patch_file(path: &Path, options: &PatchOptions) -> AppResult<PatchOutcome> {
    let bytes = fs::read(path).map_err(|e| AppError::Read(path.to_path_buf(), e))?;
    let source = String::from_utf8(bytes).map_err(|_| AppError::Decoding(path.to_path_buf()))?;

    let outcome = patch_source(&source, options);

    match &outcome {
        PatchOutcome::Inserted { content, .. } if !options.dry_run => {
            fs::write(path, content).map_err(|e| AppError::Write(path.to_path_buf(), e))?;
        }
        PatchOutcome::Inserted { .. } => {}
        skipped => log::debug!("Leaving {:?} unchanged: {:?}", path, skipped),
    }

    Ok(outcome)
}
