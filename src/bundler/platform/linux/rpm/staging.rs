//! rpmbuild staging tree.

use crate::bundler::{
    error::{ErrorExt, Result},
    utils::fs,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Subdirectories rpmbuild expects below `_topdir`.
pub const STAGING_SUBDIRS: [&str; 5] = ["BUILD", "RPMS", "SOURCES", "SPECS", "SRPMS"];

const STAGING_PREFIX: &str = "tktfwd-rpmbuild-";

/// Temporary rpmbuild `_topdir`, owned by one packaging run.
///
/// The whole tree is removed when the value is dropped, on success and
/// failure alike.
#[derive(Debug)]
pub struct StagingTree {
    root: TempDir,
}

impl StagingTree {
    /// Creates a fresh, uniquely named tree.
    ///
    /// The root goes under `parent` when given, otherwise under the system
    /// temp directory.
    pub async fn create(parent: Option<&Path>) -> Result<Self> {
        let parent = parent
            .map(Path::to_path_buf)
            .unwrap_or_else(std::env::temp_dir);

        let root = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&parent)
            .fs_context("creating staging root", &parent)?;
        let tree = Self { root };

        for subdir in STAGING_SUBDIRS {
            fs::create_dir(&tree.root().join(subdir)).await?;
        }

        log::debug!("Staging tree created at {}", tree.root().display());
        Ok(tree)
    }

    /// Root of the tree, passed to rpmbuild as `_topdir`.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// `BUILD`
    pub fn build_dir(&self) -> PathBuf {
        self.root().join("BUILD")
    }

    /// `RPMS`, where binary packages land.
    pub fn rpms_dir(&self) -> PathBuf {
        self.root().join("RPMS")
    }

    /// `SOURCES`, holding the source archive.
    pub fn sources_dir(&self) -> PathBuf {
        self.root().join("SOURCES")
    }

    /// `SPECS`, holding the rendered spec.
    pub fn specs_dir(&self) -> PathBuf {
        self.root().join("SPECS")
    }

    /// `SRPMS`
    pub fn srpms_dir(&self) -> PathBuf {
        self.root().join("SRPMS")
    }

    /// Removes the tree now, reporting failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        let root = self.root().to_path_buf();
        self.root
            .close()
            .fs_context("removing staging tree", &root)?;
        log::debug!("Removed staging tree {}", root.display());
        Ok(())
    }
}

/// Creates a staging tree under the system temp directory.
pub async fn create_staging_tree() -> Result<StagingTree> {
    StagingTree::create(None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tree_has_exactly_five_empty_subdirectories() {
        let parent = tempfile::tempdir().unwrap();
        let tree = StagingTree::create(Some(parent.path())).await.unwrap();

        let mut names: Vec<_> = std::fs::read_dir(tree.root())
            .unwrap()
            .map(|e| e.unwrap())
            .inspect(|e| {
                assert!(e.file_type().unwrap().is_dir());
                assert_eq!(std::fs::read_dir(e.path()).unwrap().count(), 0);
            })
            .map(|e| e.file_name().into_string().unwrap())
            .collect();
        names.sort();

        assert_eq!(names, STAGING_SUBDIRS);
        assert!(tree.root().starts_with(parent.path()));
    }

    #[tokio::test]
    async fn trees_are_unique_and_removed_on_drop() {
        let parent = tempfile::tempdir().unwrap();
        let first = StagingTree::create(Some(parent.path())).await.unwrap();
        let second = StagingTree::create(Some(parent.path())).await.unwrap();
        assert_ne!(first.root(), second.root());

        let first_root = first.root().to_path_buf();
        drop(first);
        assert!(!first_root.exists());

        let second_root = second.root().to_path_buf();
        second.close().unwrap();
        assert!(!second_root.exists());
    }

    #[tokio::test]
    async fn missing_parent_is_an_io_error() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("gone");
        let err = StagingTree::create(Some(&missing)).await.unwrap_err();
        assert!(err.to_string().contains("creating staging root"));
    }
}
