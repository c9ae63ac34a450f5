//! RPM bundling for the ticket forwarder tools.
//!
//! The entry point is [`Bundler`]: it classifies the host, stages an
//! rpmbuild tree, renders the spec, archives the build output and runs
//! rpmbuild.
//!
//! # Example
//!
//! ```no_run
//! use tktfwd_bundler::bundler::{Bundler, PackageSettings, SettingsBuilder};
//!
//! # async fn example() -> tktfwd_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .build_out_directory("build/release")
//!     .package_settings(PackageSettings {
//!         version: "1.2.3".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let artifact = Bundler::new(settings).bundle().await?;
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use platform::{PlatformClassification, classify_host};
pub use settings::{
    BundleBinary, PackageSettings, RpmSettings, Settings, SettingsBuilder, Variant, VariantTable,
};

use std::path::PathBuf;

/// Packages produced by one run.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Package files, copied out of the staging tree.
    pub paths: Vec<PathBuf>,
    /// Total size in bytes.
    pub size: u64,
    /// SHA-256 of the first package.
    pub checksum: String,
}
