#![deny(missing_docs)]

//! # PI Patch CLI
//!
//! Adds `#define PI 3.1415926535897932384626433832795` to fragment shaders
//! that reference `PI`, right after their last uniform declaration.
//!
//! Configuration comes from arguments, `PI_PATCH_*` environment variables, or
//! a `.env` file in the working directory.

use clap::Parser;
use pi_patch_core::AppResult;

use crate::patch::ConsoleReporter;

mod patch;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Adds a PI definition to shaders that use it")]
struct Cli {
    #[clap(flatten)]
    patch: patch::PatchArgs,
}

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    patch::execute(&cli.patch, &mut ConsoleReporter)?;

    Ok(())
}
