//! Build variants and their compiler flags.

use crate::bundler::error::{Error, Result};
use std::collections::BTreeMap;

/// Target platform key used in per-platform flag tables.
///
/// Keys follow the build engine's platform names (`linux`, `win32`).
pub type TargetPlatform = String;

/// A named build configuration selecting compiler flags.
///
/// # Configuration
///
/// ```toml
/// [variants.debug]
/// bin_suffix = "-g"
/// cxxflags = { linux = ["-O0", "-g"], win32 = ["/Zi"] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Variant {
    /// Variant name, filled from the table key.
    #[serde(skip)]
    pub name: String,

    /// Suffix appended to every binary built in this variant.
    ///
    /// Default: "" (no suffix)
    #[serde(default)]
    pub bin_suffix: String,

    /// Ordered C++ compiler flags per target platform.
    #[serde(default)]
    pub cxxflags: BTreeMap<TargetPlatform, Vec<String>>,
}

impl Variant {
    /// Creates a variant from a flag table.
    pub fn new(
        name: impl Into<String>,
        bin_suffix: impl Into<String>,
        cxxflags: impl IntoIterator<Item = (&'static str, Vec<&'static str>)>,
    ) -> Self {
        Self {
            name: name.into(),
            bin_suffix: bin_suffix.into(),
            cxxflags: cxxflags
                .into_iter()
                .map(|(platform, flags)| {
                    (
                        platform.to_string(),
                        flags.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Returns the flags for `platform`, empty when the platform has none.
    pub fn flags_for(&self, platform: &str) -> &[String] {
        self.cxxflags.get(platform).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the on-disk name of `binary` as built in this variant.
    pub fn binary_name(&self, binary: &str) -> String {
        format!("{binary}{}", self.bin_suffix)
    }
}

/// Immutable lookup table of build variants.
///
/// Built once at start-up and passed to the routines that need it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantTable {
    variants: BTreeMap<String, Variant>,
}

impl Default for VariantTable {
    fn default() -> Self {
        Self::from_variants([
            Variant::new(
                "release",
                "",
                [("linux", vec!["-O2"]), ("win32", vec!["/Ox"])],
            ),
            Variant::new(
                "debug",
                "-g",
                [("linux", vec!["-O0", "-g"]), ("win32", vec!["/Zi"])],
            ),
        ])
    }
}

impl VariantTable {
    /// Builds a table from variants, keyed by their names.
    pub fn from_variants(variants: impl IntoIterator<Item = Variant>) -> Self {
        Self {
            variants: variants.into_iter().map(|v| (v.name.clone(), v)).collect(),
        }
    }

    /// Builds a table from deserialized entries, naming each variant by its key.
    pub fn from_map(entries: BTreeMap<String, Variant>) -> Self {
        Self::from_variants(entries.into_iter().map(|(name, mut variant)| {
            variant.name = name;
            variant
        }))
    }

    /// Looks a variant up by name.
    pub fn get(&self, name: &str) -> Result<&Variant> {
        self.variants.get(name).ok_or_else(|| Error::UnknownVariant {
            name: name.to_string(),
            known: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Variant names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// All variants in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }
}
