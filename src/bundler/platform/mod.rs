//! Host platform classification and platform-specific bundlers.

mod detection;
pub mod linux;

pub use detection::{RPM_DISTRO_PREFIXES, classify, classify_host, read_distro_name};

use std::fmt;

/// Packaging capability of the host, derived once per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlatformClassification {
    /// Linux distribution from the RPM family.
    RpmLinux {
        /// Distribution name as reported by the host
        distro: String,
    },
    /// Linux distribution without RPM tooling, or one that could not be identified.
    UnsupportedLinux {
        /// Distribution name, `None` when no release file was readable
        distro: Option<String>,
    },
    /// Microsoft Windows.
    Windows,
    /// Any other operating system.
    Other {
        /// Operating system identifier (`std::env::consts::OS`)
        os: String,
    },
}

impl fmt::Display for PlatformClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RpmLinux { distro } => write!(f, "{distro} (rpm-based Linux)"),
            Self::UnsupportedLinux { distro: Some(distro) } => write!(f, "{distro} (Linux)"),
            Self::UnsupportedLinux { distro: None } => {
                f.write_str("unidentified Linux distribution")
            }
            Self::Windows => f.write_str("Windows"),
            Self::Other { os } => f.write_str(os),
        }
    }
}
