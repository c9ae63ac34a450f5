//! RPM package creation.
//!
//! Drives rpmbuild through a throwaway `_topdir`:
//!
//! 1. Verify the variant's build output holds every packaged binary
//! 2. Create the staging tree (`BUILD`, `RPMS`, `SOURCES`, `SPECS`, `SRPMS`)
//! 3. Render the spec into `SPECS`
//! 4. Archive the build output into `SOURCES/<name>-<version>.tar.gz`
//! 5. Run rpmbuild and copy the produced packages to the output directory
//!
//! The staging tree is removed when this function returns, whatever the
//! outcome.

pub mod archive;
pub mod build;
pub mod spec;
pub mod staging;
pub mod template;

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

pub use staging::{STAGING_SUBDIRS, StagingTree, create_staging_tree};

/// Bundle project as RPM.
///
/// # Returns
///
/// Paths of the produced packages, copied into
/// [`Settings::output_directory`].
pub async fn bundle_project(
    settings: &Settings,
    cancel: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    log::info!(
        "Building RPM for {} {} ({} variant)",
        settings.product_name(),
        settings.version_string(),
        settings.variant().name
    );

    verify_build_output(settings)?;

    let staging = StagingTree::create(settings.rpm().staging_parent.as_deref()).await?;
    log::info!("Staged rpmbuild tree at {}", staging.root().display());
    ensure_not_cancelled(cancel)?;

    let context = spec::SpecContext::from_settings(settings, chrono::Local::now().date_naive());
    let spec_path =
        spec::render_spec(template::SPEC_TEMPLATE, &context, &staging.specs_dir()).await?;
    log::info!("Rendered {}", spec_path.display());
    ensure_not_cancelled(cancel)?;

    let archive_path = archive::create_source_archive(
        settings.build_out_directory(),
        &settings.source_dir_name(),
        &staging.sources_dir().join(settings.source_archive_name()),
        Some(settings.output_directory()),
    )
    .await?;
    log::info!("Archived build output to {}", archive_path.display());
    ensure_not_cancelled(cancel)?;

    let output = build::run_rpmbuild(&settings.rpm().rpmbuild, &staging, &spec_path, cancel).await?;

    let built = build::collect_packages(&staging.rpms_dir())?;
    if built.is_empty() {
        return Err(Error::SubprocessFailure {
            command: settings.rpm().rpmbuild.display().to_string(),
            code: Some(0),
            stdout: output.stdout,
            stderr: format!(
                "{}no packages were written to {}\n",
                output.stderr,
                staging.rpms_dir().display()
            ),
        });
    }

    let mut packages = Vec::with_capacity(built.len());
    for package in built {
        let file_name = package
            .file_name()
            .ok_or_else(|| Error::GenericError(format!("{} has no file name", package.display())))?;
        let destination = settings.output_directory().join(file_name);
        fs::copy_file(&package, &destination).await?;
        packages.push(destination);
    }

    if let Err(e) = staging.close() {
        log::warn!("{e}");
    }

    Ok(packages)
}

/// Fails with an I/O error naming the first packaged binary missing from the
/// build output.
fn verify_build_output(settings: &Settings) -> Result<()> {
    let build_out = settings.build_out_directory();
    for binary in settings.binaries() {
        let staged = build_out.join(settings.variant().binary_name(binary.name()));
        if !staged.is_file() {
            return Err(Error::Fs {
                context: "locating built binary",
                path: staged,
                error: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "binary missing from build output; build the variant first",
                ),
            });
        }
    }
    Ok(())
}

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}
