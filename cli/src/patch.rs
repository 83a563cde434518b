#![deny(missing_docs)]

//! # Patch Command
//!
//! Walks a shader directory and adds `#define PI ...` after the last uniform
//! declaration of every fragment shader that uses `PI` without defining it.

use pi_patch_core::{
    run, AppError, AppResult, ErrorPolicy, PatchOptions, Reporter, RunSummary, ShaderWalker,
    DEFAULT_EXTENSION,
};
use std::path::{Path, PathBuf};

/// Arguments for the patch command.
#[derive(clap::Args, Debug, Clone)]
pub struct PatchArgs {
    /// Root directory holding the shaders.
    #[clap(env = "PI_PATCH_ROOT", default_value = "shaders")]
    pub root: PathBuf,

    /// File name suffix selecting shaders (case-sensitive).
    #[clap(long, env = "PI_PATCH_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Log failing files and keep going instead of stopping at the first error.
    #[clap(long)]
    pub keep_going: bool,

    /// Leave shaders that already `#define PI` untouched.
    #[clap(long)]
    pub skip_defined: bool,

    /// Report what would change without writing any file.
    #[clap(long)]
    pub dry_run: bool,
}

impl PatchArgs {
    fn options(&self) -> PatchOptions {
        PatchOptions {
            skip_defined: self.skip_defined,
            dry_run: self.dry_run,
        }
    }

    fn policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        }
    }
}

/// Prints progress lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn traversing(&mut self, root: &Path) {
        println!("Traversing directory: {}", root.display());
    }

    fn visited(&mut self, file_name: &str) {
        println!("{}", file_name);
    }

    fn processing(&mut self, path: &Path) {
        println!("Processing file: {}", path.display());
    }

    fn updated(&mut self, path: &Path, dry_run: bool) {
        if dry_run {
            println!("Would update file: {}", path.display());
        } else {
            println!("Updated file: {}", path.display());
        }
    }

    fn failed(&mut self, error: &AppError) {
        eprintln!("Failed: {}", error);
    }
}

/// Executes the patch run.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `reporter` - Sink for progress events.
pub fn execute(args: &PatchArgs, reporter: &mut impl Reporter) -> AppResult<RunSummary> {
    let walker = ShaderWalker::new(&args.root, args.extension.as_str());
    let summary = run(&walker, &args.options(), args.policy(), reporter)?;

    println!("{}", summary);

    if !summary.is_success() {
        return Err(AppError::General(format!(
            "{} file(s) could not be patched",
            summary.failed.len()
        )));
    }

    Ok(summary)
}
