//! Command line argument parsing and validation.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::metadata::DEFAULT_CONFIG_FILE;

/// Build variants and RPM packaging for the ticket forwarder tools
#[derive(Parser, Debug)]
#[command(
    name = "tktfwd_bundler",
    version,
    about = "Build variants and RPM packaging for the ticket forwarder tools",
    long_about = "Packages the output of a variant build into an RPM.

Usage:
  tktfwd_bundler package
  tktfwd_bundler --variant debug package --output-dir dist
  tktfwd_bundler variants

Exit code 0 = package created and copied to the output directory."
)]
pub struct Args {
    /// Project configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "TKTFWD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Build variant whose output is packaged
    #[arg(long, global = true, value_name = "NAME", default_value = "release")]
    pub variant: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build an RPM from the selected variant's build output
    Package {
        /// Build engine output root (the variant directory lives below it)
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,

        /// Directory the finished packages are copied into
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
    /// Print the build variants and their compiler flags
    Variants,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.variant.trim().is_empty() {
            return Err("Variant cannot be empty".to_string());
        }
        Ok(())
    }

    /// Configuration path and whether it was requested explicitly.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }

    /// Log level implied by `-v`/`-q`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Warn;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_release_and_info() {
        let args = Args::try_parse_from(["tktfwd_bundler", "package"]).unwrap();
        assert_eq!(args.variant, "release");
        assert_eq!(args.log_level(), log::LevelFilter::Info);
        assert_eq!(
            args.command,
            Command::Package {
                build_dir: None,
                output_dir: None
            }
        );
        assert_eq!(args.config_path(), (PathBuf::from("tktfwd.toml"), false));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["tktfwd_bundler", "package", "--variant", "debug", "-vv"])
            .unwrap();
        assert_eq!(args.variant, "debug");
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["tktfwd_bundler", "-q", "-v", "variants"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["tktfwd_bundler"]).is_err());
    }
}
