//! Build variants and RPM packaging for the Treadmill ticket forwarder tools.
//!
//! The library provides:
//! - the build variant table (release/debug compiler flags)
//! - host classification (rpm-based Linux, other Linux, Windows, other)
//! - the packaging workflow: staging tree, spec rendering, source archive
//!   and rpmbuild invocation
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
