//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator: it classifies the host,
//! refuses platforms that cannot build RPMs, delegates to the RPM bundler and
//! describes the produced packages.

use crate::{
    bail,
    bundler::{
        BundledArtifact, Result, Settings,
        error::{Error, ErrorExt},
        platform::{self, PlatformClassification},
    },
};
use tokio_util::sync::CancellationToken;

use super::checksum::calculate_sha256;

/// Main bundler orchestrator.
///
/// # Examples
///
/// ```no_run
/// use tktfwd_bundler::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> tktfwd_bundler::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
/// let artifact = bundler.bundle().await?;
/// for path in &artifact.paths {
///     println!("Created {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    cancel: CancellationToken,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses `cancel` to abort the run; a running rpmbuild is killed.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Packages the build output for the running host.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        self.bundle_for(&platform::classify_host()).await
    }

    /// Packages the build output for an already classified host.
    ///
    /// Nothing touches the filesystem until the platform check passes.
    pub async fn bundle_for(&self, host: &PlatformClassification) -> Result<BundledArtifact> {
        let paths = match host {
            PlatformClassification::RpmLinux { distro } => {
                log::info!("Host platform: {distro}");
                crate::bundler::platform::linux::rpm::bundle_project(&self.settings, &self.cancel)
                    .await?
            }
            PlatformClassification::Windows => {
                return Err(Error::UnsupportedPlatform {
                    reason: "packaging not implemented for this platform (Windows)".into(),
                });
            }
            PlatformClassification::UnsupportedLinux { .. } => {
                return Err(Error::UnsupportedPlatform {
                    reason: format!("{host} is not an rpm-based distribution"),
                });
            }
            PlatformClassification::Other { os } => {
                return Err(Error::UnsupportedPlatform {
                    reason: format!("packaging not implemented for {os}"),
                });
            }
        };

        let mut size = 0u64;
        for p in &paths {
            let metadata = tokio::fs::metadata(p)
                .await
                .fs_context("reading artifact metadata", p)?;
            size += metadata.len();
        }

        let checksum = match paths.first() {
            Some(first_path) => calculate_sha256(first_path).await?,
            None => bail!("RPM bundler returned no paths - this indicates a bundler bug"),
        };

        for p in &paths {
            log::info!("✓ Created package: {}", p.display());
        }

        Ok(BundledArtifact {
            paths,
            size,
            checksum,
        })
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
