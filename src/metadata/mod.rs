//! Project configuration loaded from `tktfwd.toml`.
//!
//! Every field is optional; a missing file at the default location means
//! all defaults.

use crate::bundler::{
    BundleBinary, PackageSettings, RpmSettings, Settings, SettingsBuilder, Variant, VariantTable,
    settings::{DEFAULT_BINARIES, DEFAULT_INSTALL_DIR},
};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "tktfwd.toml";

/// Complete project configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
    /// `[package]`
    pub package: PackageSection,
    /// `[build]`
    pub build: BuildSection,
    /// `[rpm]`
    pub rpm: RpmSection,
    /// `[variants.<name>]`, merged over the built-in release/debug table.
    pub variants: BTreeMap<String, Variant>,
}

/// `[package]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSection {
    pub name: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub url: Option<String>,
    pub packager: Option<String>,
    pub install_dir: Option<PathBuf>,
    pub binaries: Option<Vec<String>>,
}

/// `[build]` table.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSection {
    /// Build engine output root; each variant builds into `<out_dir>/<variant>`.
    pub out_dir: PathBuf,
    /// Where finished packages go. Default: `<out_dir>/<variant>/bundle/rpm`.
    pub dist_dir: Option<PathBuf>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("build"),
            dist_dir: None,
        }
    }
}

/// `[rpm]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpmSection {
    /// Package builder executable.
    pub rpmbuild: Option<PathBuf>,
    /// Parent directory for staging trees.
    pub staging_dir: Option<PathBuf>,
}

/// Loads the configuration at `path`.
///
/// When `required` is false a missing file yields the defaults.
pub fn load_manifest(path: &Path, required: bool) -> Result<ProjectManifest> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            log::debug!("No {} found, using defaults", path.display());
            return Ok(ProjectManifest::default());
        }
        Err(e) => {
            return Err(CliError::ConfigUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into());
        }
    };

    parse_manifest(&contents)
}

/// Parses configuration text.
pub fn parse_manifest(contents: &str) -> Result<ProjectManifest> {
    Ok(toml::from_str(contents)?)
}

/// Overrides supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Replaces `[build] out_dir`.
    pub build_dir: Option<PathBuf>,
    /// Replaces `[build] dist_dir`.
    pub output_dir: Option<PathBuf>,
}

impl ProjectManifest {
    /// The built-in variants with configured ones layered on top.
    pub fn variant_table(&self) -> VariantTable {
        let defaults = VariantTable::default();
        let mut merged: BTreeMap<String, Variant> = defaults
            .iter()
            .map(|v| (v.name.clone(), v.clone()))
            .collect();
        merged.extend(self.variants.clone());
        VariantTable::from_map(merged)
    }

    /// Package metadata with defaults filled in.
    pub fn package_settings(&self) -> PackageSettings {
        let defaults = PackageSettings::default();
        let p = &self.package;
        PackageSettings {
            name: p.name.clone().unwrap_or(defaults.name),
            version: p.version.clone().unwrap_or(defaults.version),
            summary: p.summary.clone().unwrap_or(defaults.summary),
            description: p.description.clone().unwrap_or(defaults.description),
            license: p.license.clone().unwrap_or(defaults.license),
            url: p.url.clone().unwrap_or(defaults.url),
            packager: p.packager.clone().unwrap_or(defaults.packager),
        }
    }

    /// RPM settings with defaults filled in.
    pub fn rpm_settings(&self) -> RpmSettings {
        let defaults = RpmSettings::default();
        RpmSettings {
            release: self.package.release.clone().unwrap_or(defaults.release),
            rpmbuild: self.rpm.rpmbuild.clone().unwrap_or(defaults.rpmbuild),
            staging_parent: self.rpm.staging_dir.clone(),
        }
    }

    /// Configured binaries installed under the configured directory.
    pub fn binaries(&self) -> Vec<BundleBinary> {
        let install_dir = self
            .package
            .install_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_DIR));

        match &self.package.binaries {
            Some(names) => names
                .iter()
                .map(|name| BundleBinary::new(name.clone(), &install_dir))
                .collect(),
            None => DEFAULT_BINARIES
                .iter()
                .map(|name| BundleBinary::new((*name).to_string(), &install_dir))
                .collect(),
        }
    }

    /// Assembles [`Settings`] for packaging `variant`.
    pub fn settings(&self, variant: &str, overrides: &Overrides) -> Result<Settings> {
        let variant = self.variant_table().get(variant)?.clone();
        let out_dir = overrides
            .build_dir
            .clone()
            .unwrap_or_else(|| self.build.out_dir.clone());

        let mut builder = SettingsBuilder::new()
            .build_out_directory(out_dir.join(&variant.name))
            .package_settings(self.package_settings())
            .rpm_settings(self.rpm_settings())
            .binaries(self.binaries())
            .variant(variant);

        if let Some(dist) = overrides.output_dir.clone().or_else(|| self.build.dist_dir.clone()) {
            builder = builder.output_directory(dist);
        }

        Ok(builder.build()?)
    }
}
