#![deny(missing_docs)]

//! # PI Patch Core
//!
//! Core library for adding a `PI` definition to fragment shaders that use it.

/// Shared error types.
pub mod error;

/// Shader source patching.
pub mod patcher;

/// Progress reporting interface.
pub mod report;

/// Walk-and-patch driver.
pub mod runner;

/// Shader tree enumeration.
pub mod walker;

pub use error::{AppError, AppResult};
pub use patcher::{patch_file, patch_source, PatchOptions, PatchOutcome, PI_DEFINE};
pub use report::{Reporter, SilentReporter};
pub use runner::{run, ErrorPolicy, Failure, RunSummary};
pub use walker::{ShaderWalker, DEFAULT_EXTENSION};
