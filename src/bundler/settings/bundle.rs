//! Binaries shipped in the package.

use std::path::{Path, PathBuf};

/// Default install directory for packaged executables.
pub const DEFAULT_INSTALL_DIR: &str = "/usr/bin";

/// Executables shipped by default.
pub const DEFAULT_BINARIES: [&str; 5] = ["tkt-send", "tkt-recv", "kt-split", "kt-add", "k-realm"];

/// A binary to bundle into the package.
///
/// # Examples
///
/// ```no_run
/// use tktfwd_bundler::bundler::BundleBinary;
///
/// let binary = BundleBinary::new("tkt-send".into(), "/usr/bin");
/// assert_eq!(binary.install_path(), std::path::Path::new("/usr/bin/tkt-send"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleBinary {
    name: String,
    install_path: PathBuf,
}

impl BundleBinary {
    /// Creates a binary installed as `install_dir/name`.
    pub fn new(name: String, install_dir: impl AsRef<Path>) -> Self {
        let install_path = install_dir.as_ref().join(&name);
        Self { name, install_path }
    }

    /// Returns the installed binary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the absolute install path.
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }
}

/// The default five binaries installed under [`DEFAULT_INSTALL_DIR`].
pub fn default_binaries() -> Vec<BundleBinary> {
    DEFAULT_BINARIES
        .iter()
        .map(|name| BundleBinary::new((*name).to_string(), DEFAULT_INSTALL_DIR))
        .collect()
}
