#![deny(missing_docs)]

//! # Run Driver
//!
//! Walks a shader tree, patches every matching file and tallies the results.
//!
//! Files are handled one at a time; each is fully read, patched and written
//! before the next one is touched.

use crate::error::{AppError, AppResult};
use crate::patcher::{patch_file, PatchOptions};
use crate::report::Reporter;
use crate::walker::ShaderWalker;
use std::fmt::Display;
use std::path::PathBuf;

/// What to do when a file or directory fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it. Files not yet reached stay untouched.
    #[default]
    Abort,
    /// Report the error, record it in the summary and keep walking.
    Continue,
}

/// A file that could not be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The file or directory involved, if known.
    pub path: Option<PathBuf>,
    /// Rendered error message.
    pub message: String,
}

/// Counts gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files visited, matching or not.
    pub visited: usize,
    /// Files matching the extension that were handed to the patcher.
    pub scanned: usize,
    /// Files rewritten (or that would be, in a dry run).
    pub updated: Vec<PathBuf>,
    /// Failures tolerated under `ErrorPolicy::Continue`.
    pub failed: Vec<Failure>,
}

impl RunSummary {
    /// True when no failure was recorded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Summary: {} scanned, {} updated, {} failed",
            self.scanned,
            self.updated.len(),
            self.failed.len()
        )
    }
}

/// Patches every shader below the walker's root.
///
/// # Arguments
///
/// * `walker` - Root directory and extension filter.
/// * `options` - Patch behavior applied to each file.
/// * `policy` - Whether errors abort the run or are collected.
/// * `reporter` - Receives progress events.
pub fn run(
    walker: &ShaderWalker,
    options: &PatchOptions,
    policy: ErrorPolicy,
    reporter: &mut impl Reporter,
) -> AppResult<RunSummary> {
    reporter.traversing(walker.root());

    let mut summary = RunSummary::default();

    for entry in walker.files() {
        let result = entry.and_then(|path| {
            summary.visited += 1;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            reporter.visited(&name);

            if !walker.matches(&path) {
                return Ok(());
            }

            summary.scanned += 1;
            reporter.processing(&path);
            if patch_file(&path, options)?.is_modified() {
                reporter.updated(&path, options.dry_run);
                summary.updated.push(path);
            }
            Ok(())
        });

        if let Err(error) = result {
            tolerate(error, policy, reporter, &mut summary)?;
        }
    }

    Ok(summary)
}

fn tolerate(
    error: AppError,
    policy: ErrorPolicy,
    reporter: &mut impl Reporter,
    summary: &mut RunSummary,
) -> AppResult<()> {
    match policy {
        ErrorPolicy::Abort => Err(error),
        ErrorPolicy::Continue => {
            log::warn!("Continuing after error: {}", error);
            reporter.failed(&error);
            summary.failed.push(Failure {
                path: error.path().map(|p| p.to_path_buf()),
                message: error.to_string(),
            });
            Ok(())
        }
    }
}
