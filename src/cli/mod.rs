//! Command line interface.
//!
//! Parses arguments, loads the project configuration and dispatches to the
//! `package` and `variants` commands.

mod args;
pub mod commands;

pub use args::{Args, Command};

use crate::error::{CliError, Result};
use crate::metadata::{self, Overrides};

/// Main CLI entry point. Returns the process exit code.
pub async fn run(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let (config_path, required) = args.config_path();
    let manifest = metadata::load_manifest(&config_path, required)?;

    match &args.command {
        Command::Package {
            build_dir,
            output_dir,
        } => {
            let overrides = Overrides {
                build_dir: build_dir.clone(),
                output_dir: output_dir.clone(),
            };
            let settings = manifest.settings(&args.variant, &overrides)?;
            commands::package(settings).await
        }
        Command::Variants => commands::variants(&manifest.variant_table()),
    }
}
