//! Builder for constructing Settings.

use super::{
    BundleBinary, PackageSettings, RpmSettings, Settings, Variant, VariantTable,
    bundle::default_binaries, package::validate_package_name,
};
use crate::bundler::error::{Context, Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use tktfwd_bundler::bundler::{SettingsBuilder, VariantTable};
///
/// # fn example() -> tktfwd_bundler::bundler::Result<()> {
/// let table = VariantTable::default();
/// let settings = SettingsBuilder::new()
///     .build_out_directory("build/debug")
///     .variant(table.get("debug")?.clone())
///     .output_directory("dist")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    build_out_directory: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    rpm_settings: RpmSettings,
    variant: Option<Variant>,
    binaries: Option<Vec<BundleBinary>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the build output directory of the selected variant.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn build_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets where finished packages are copied.
    ///
    /// Default: `<build_out_directory>/bundle/rpm`
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets RPM configuration.
    ///
    /// Default: [`RpmSettings::default`]
    pub fn rpm_settings(mut self, settings: RpmSettings) -> Self {
        self.rpm_settings = settings;
        self
    }

    /// Sets the build variant.
    ///
    /// Default: `release` from [`VariantTable::default`]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets binaries to package.
    ///
    /// Default: the five ticket forwarding tools under `/usr/bin`
    pub fn binaries(mut self, binaries: Vec<BundleBinary>) -> Self {
        self.binaries = Some(binaries);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `build_out_directory` is missing, the binary list
    /// is empty, the package name is not a plain file name, or the version
    /// is not a valid RPM version.
    pub fn build(self) -> Result<Settings> {
        let build_out_directory = self
            .build_out_directory
            .context("build_out_directory is required")?;
        let output_directory = self
            .output_directory
            .unwrap_or_else(|| build_out_directory.join("bundle/rpm"));

        let package = self.package_settings.unwrap_or_default();
        validate_package_name(&package.name)?;
        validate_rpm_field("version", &package.version)?;
        validate_rpm_field("release", &self.rpm_settings.release)?;

        let variant = match self.variant {
            Some(variant) => variant,
            None => VariantTable::default().get("release")?.clone(),
        };

        let binaries = self.binaries.unwrap_or_else(default_binaries);
        if binaries.is_empty() {
            return Err(Error::GenericError("No binaries found to package".into()));
        }

        Ok(Settings::new(
            package,
            self.rpm_settings,
            variant,
            build_out_directory,
            output_directory,
            binaries,
        ))
    }
}

/// RPM `Version` and `Release` must be non-empty and free of `-` and whitespace.
fn validate_rpm_field(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains('-') || value.chars().any(char::is_whitespace) {
        return Err(Error::GenericError(format!(
            "invalid RPM {field} `{value}`: must be non-empty without '-' or whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_release_variant_and_five_binaries() {
        let settings = SettingsBuilder::new()
            .build_out_directory("build/release")
            .build()
            .unwrap();

        assert_eq!(settings.variant().name, "release");
        assert_eq!(settings.binaries().len(), 5);
        assert_eq!(
            settings.output_directory(),
            Path::new("build/release/bundle/rpm")
        );
    }

    #[test]
    fn missing_build_directory_is_an_error() {
        assert!(SettingsBuilder::new().build().is_err());
    }

    #[test]
    fn hyphenated_version_is_rejected() {
        let result = SettingsBuilder::new()
            .build_out_directory("build")
            .package_settings(PackageSettings {
                version: "1.2.3-rc1".into(),
                ..Default::default()
            })
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn package_name_escaping_the_staging_tree_is_rejected() {
        for name in ["../escaped", "sub/dir", "with space", ""] {
            let result = SettingsBuilder::new()
                .build_out_directory("build")
                .package_settings(PackageSettings {
                    name: name.into(),
                    ..Default::default()
                })
                .build();

            let err = result.unwrap_err();
            assert!(err.to_string().contains("invalid package name"), "{name:?}");
        }
    }
}
