//! File system utilities for bundling.
//!
//! Thin wrappers over `tokio::fs` that attach the offending path to every
//! error.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt};

/// Creates a single directory. The parent must already exist.
pub async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path)
        .await
        .fs_context("creating directory", path)
}

/// Writes `contents` to `path`, replacing any existing file.
pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path)
        .await
        .fs_context("creating file", path)?;
    file.write_all(contents)
        .await
        .fs_context("writing file", path)?;
    file.flush().await.fs_context("flushing file", path)?;
    Ok(())
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    if !from.is_file() {
        return Err(Error::GenericError(format!(
            "{} does not exist or is not a file",
            from.display()
        )));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)
}
