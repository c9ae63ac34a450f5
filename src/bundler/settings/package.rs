//! Package metadata written into the spec preamble.

use crate::bundler::error::{Error, Result};

/// Default package name.
pub const DEFAULT_PACKAGE_NAME: &str = "treadmill-tktfwd";

/// Package metadata and configuration.
///
/// Everything the spec preamble and `%description` need. Loaded from the
/// `[package]` table of the project configuration.
///
/// # Examples
///
/// ```no_run
/// use tktfwd_bundler::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     name: "treadmill-tktfwd".into(),
///     version: "1.2.3".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    /// Package name, also the prefix of the source archive.
    pub name: String,

    /// Upstream version. RPM forbids `-` here.
    pub version: String,

    /// One line summary.
    pub summary: String,

    /// Longer free-form description.
    pub description: String,

    /// License tag.
    pub license: String,

    /// Project homepage.
    pub url: String,

    /// Packager identity used in the changelog entry.
    ///
    /// Format: "Name <email@example.com>"
    pub packager: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE_NAME.to_string(),
            version: "0.1.0".to_string(),
            summary: "Kerberos ticket forwarding tools for Treadmill".to_string(),
            description: "Tools to forward, receive and split Kerberos tickets and keytabs \
                          between Treadmill hosts."
                .to_string(),
            license: "Apache-2.0".to_string(),
            url: "https://github.com/morganstanley/treadmill".to_string(),
            packager: "Treadmill Team <treadmill@localhost>".to_string(),
        }
    }
}

/// Checks that `name` can be used as a file name component.
///
/// The name becomes `SPECS/<name>.spec` and `SOURCES/<name>-<version>.tar.gz`,
/// so it must be non-empty, must not be `.` or `..` and must hold no path
/// separators or whitespace.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(|c| std::path::is_separator(c) || c.is_whitespace())
    {
        return Err(Error::GenericError(format!(
            "invalid package name `{name}`: must be a single file name without whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_accepted() {
        assert!(validate_package_name("treadmill-tktfwd").is_ok());
        assert!(validate_package_name("tktfwd_2.x").is_ok());
    }

    #[test]
    fn path_like_names_are_rejected() {
        for name in ["", ".", "..", "../escaped", "a/b", "/abs", "two words", "tab\tname"] {
            assert!(validate_package_name(name).is_err(), "{name:?}");
        }
    }
}
