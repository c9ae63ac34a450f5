//! Core Settings struct and implementations.

use super::{BundleBinary, PackageSettings, RpmSettings, Variant};
use std::path::{Path, PathBuf};

/// Main settings for a packaging run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Holds the
/// package metadata, the selected build variant and where its output lives.
///
/// # Examples
///
/// ```no_run
/// use tktfwd_bundler::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> tktfwd_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .build_out_directory("build/release")
///     .package_settings(PackageSettings {
///         version: "1.2.3".into(),
///         ..Default::default()
///     })
///     .build()?;
/// assert_eq!(settings.source_archive_name(), "treadmill-tktfwd-1.2.3.tar.gz");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// RPM configuration.
    rpm: RpmSettings,

    /// Selected build variant.
    variant: Variant,

    /// Build output of the selected variant; archived as the package source.
    build_out_directory: PathBuf,

    /// Where finished packages are copied.
    output_directory: PathBuf,

    /// Binaries to package.
    binaries: Vec<BundleBinary>,
}

impl Settings {
    /// Returns the package name.
    pub fn product_name(&self) -> &str {
        &self.package.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the RPM settings.
    pub fn rpm(&self) -> &RpmSettings {
        &self.rpm
    }

    /// Returns the selected build variant.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Returns the build output directory of the selected variant.
    pub fn build_out_directory(&self) -> &Path {
        &self.build_out_directory
    }

    /// Returns the directory finished packages are copied into.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Returns the binaries to package.
    pub fn binaries(&self) -> &[BundleBinary] {
        &self.binaries
    }

    /// `<name>-<version>`, the top-level directory inside the source archive.
    pub fn source_dir_name(&self) -> String {
        format!("{}-{}", self.package.name, self.package.version)
    }

    /// File name of the source archive declared in the spec.
    pub fn source_archive_name(&self) -> String {
        format!("{}.tar.gz", self.source_dir_name())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        rpm: RpmSettings,
        variant: Variant,
        build_out_directory: PathBuf,
        output_directory: PathBuf,
        binaries: Vec<BundleBinary>,
    ) -> Self {
        Self {
            package,
            rpm,
            variant,
            build_out_directory,
            output_directory,
            binaries,
        }
    }
}
