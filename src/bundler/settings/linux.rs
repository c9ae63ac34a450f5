//! RPM packaging settings.

use std::path::PathBuf;

/// RPM package (.rpm) configuration.
///
/// # Configuration
///
/// ```toml
/// [rpm]
/// rpmbuild = "/usr/bin/rpmbuild"
/// release = "2"
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpmSettings {
    /// Release number appended to version.
    ///
    /// Incremented for packaging changes without version bumps.
    ///
    /// Default: "1"
    pub release: String,

    /// Package builder executable, resolved against `PATH` when relative.
    ///
    /// Default: "rpmbuild"
    pub rpmbuild: PathBuf,

    /// Parent directory for the staging tree.
    ///
    /// Default: None (system temp directory)
    pub staging_parent: Option<PathBuf>,
}

impl Default for RpmSettings {
    fn default() -> Self {
        Self {
            release: "1".to_string(),
            rpmbuild: PathBuf::from("rpmbuild"),
            staging_parent: None,
        }
    }
}
