//! Host operating system and distribution detection.

use super::PlatformClassification;
use std::path::Path;

/// Distribution name prefixes of the RPM family, matched case-insensitively.
pub const RPM_DISTRO_PREFIXES: &[&str] = &[
    "Red Hat",
    "Fedora",
    "CentOS",
    "Rocky",
    "AlmaLinux",
    "Oracle Linux",
    "Amazon Linux",
];

const OS_RELEASE: &str = "/etc/os-release";
const LEGACY_RELEASE_FILES: &[&str] = &["/etc/redhat-release", "/etc/system-release"];

/// Classifies the running host.
///
/// Never fails: an unreadable or unknown distribution is reported as
/// [`PlatformClassification::UnsupportedLinux`].
pub fn classify_host() -> PlatformClassification {
    let os = std::env::consts::OS;
    let distro = if os == "linux" {
        read_distro_name(Path::new("/"))
    } else {
        None
    };

    let classification = classify(os, distro.as_deref());
    log::debug!("Host classified as {classification}");
    classification
}

/// Classifies an operating system identifier and optional distribution name.
pub fn classify(os: &str, distro: Option<&str>) -> PlatformClassification {
    match os {
        "windows" => PlatformClassification::Windows,
        "linux" => match distro.map(str::trim).filter(|d| !d.is_empty()) {
            Some(name) if is_rpm_distro(name) => PlatformClassification::RpmLinux {
                distro: name.to_string(),
            },
            name => PlatformClassification::UnsupportedLinux {
                distro: name.map(String::from),
            },
        },
        other => PlatformClassification::Other {
            os: other.to_string(),
        },
    }
}

fn is_rpm_distro(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    RPM_DISTRO_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(&prefix.to_ascii_lowercase()))
}

/// Reads the distribution name from release files below `root`.
///
/// Tries `NAME` then `PRETTY_NAME` from `etc/os-release`, then the first
/// line of the legacy Red Hat release files.
pub fn read_distro_name(root: &Path) -> Option<String> {
    let os_release = root.join(OS_RELEASE.trim_start_matches('/'));
    if let Ok(contents) = std::fs::read_to_string(os_release) {
        if let Some(name) = os_release_value(&contents, "NAME")
            .or_else(|| os_release_value(&contents, "PRETTY_NAME"))
        {
            return Some(name);
        }
    }

    LEGACY_RELEASE_FILES.iter().find_map(|file| {
        std::fs::read_to_string(root.join(file.trim_start_matches('/')))
            .ok()
            .and_then(|contents| contents.lines().next().map(|line| line.trim().to_string()))
            .filter(|line| !line.is_empty())
    })
}

fn os_release_value(contents: &str, key: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let (k, v) = line.trim().split_once('=')?;
        if k != key {
            return None;
        }
        let value = v.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}
