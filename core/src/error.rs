//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::{Path, PathBuf};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A directory could not be traversed (e.g. permission denied on a subdirectory).
    #[display("Filesystem Error: {_0}")]
    FileSystem(walkdir::Error),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A shader file could not be opened or read.
    #[from(ignore)]
    #[display("Read Error: {}: {}", _0.display(), _1)]
    Read(PathBuf, std::io::Error),

    /// A shader file is not valid UTF-8 text.
    #[from(ignore)]
    #[display("Decoding Error: {} is not valid UTF-8", _0.display())]
    Decoding(PathBuf),

    /// A patched shader could not be written back.
    #[from(ignore)]
    #[display("Write Error: {}: {}", _0.display(), _1)]
    Write(PathBuf, std::io::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// The file the error refers to, when one is known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AppError::FileSystem(e) => e.path(),
            AppError::Read(p, _) | AppError::Decoding(p) | AppError::Write(p, _) => Some(p),
            AppError::Io(_) | AppError::General(_) => None,
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
