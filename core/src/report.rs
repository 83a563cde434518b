#![deny(missing_docs)]

//! # Progress Reporting
//!
//! The `Reporter` trait receives progress events from the runner so the core
//! stays free of console I/O. The CLI prints them; tests record them with
//! `RecordingReporter` (behind the `test-util` feature).

use crate::error::AppError;
use std::path::Path;
#[cfg(any(test, feature = "test-util"))]
use std::path::PathBuf;

/// Receives progress events during a run.
///
/// All methods default to doing nothing.
pub trait Reporter {
    /// Called once before the walk starts.
    fn traversing(&mut self, _root: &Path) {}

    /// Called for every file visited, matching or not.
    fn visited(&mut self, _file_name: &str) {}

    /// Called before a matching file is patched.
    fn processing(&mut self, _path: &Path) {}

    /// Called after a file was rewritten (or would be, in a dry run).
    fn updated(&mut self, _path: &Path, _dry_run: bool) {}

    /// Called for a failure tolerated under `ErrorPolicy::Continue`.
    fn failed(&mut self, _error: &AppError) {}
}

/// A reporter that swallows every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// One recorded progress event.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// See [`Reporter::traversing`].
    Traversing(PathBuf),
    /// See [`Reporter::visited`].
    Visited(String),
    /// See [`Reporter::processing`].
    Processing(PathBuf),
    /// See [`Reporter::updated`].
    Updated(PathBuf),
    /// See [`Reporter::failed`]; holds the error message.
    Failed(String),
}

/// Collects events in order.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    /// Events received so far.
    pub events: Vec<Event>,
}

#[cfg(any(test, feature = "test-util"))]
impl Reporter for RecordingReporter {
    fn traversing(&mut self, root: &Path) {
        self.events.push(Event::Traversing(root.to_path_buf()));
    }

    fn visited(&mut self, file_name: &str) {
        self.events.push(Event::Visited(file_name.to_string()));
    }

    fn processing(&mut self, path: &Path) {
        self.events.push(Event::Processing(path.to_path_buf()));
    }

    fn updated(&mut self, path: &Path, _dry_run: bool) {
        self.events.push(Event::Updated(path.to_path_buf()));
    }

    fn failed(&mut self, error: &AppError) {
        self.events.push(Event::Failed(error.to_string()));
    }
}
