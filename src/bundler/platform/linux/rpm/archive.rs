//! Source archive creation.
//!
//! Packs the variant's build output into a gzip-compressed tarball whose
//! entries live under a single `<name>-<version>/` directory, the layout
//! `%setup` expects.

use crate::bundler::error::{Error, ErrorExt, Result};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Creates `archive_path` from the contents of `build_out`.
///
/// `exclude` is skipped while walking, so a package output directory nested
/// inside the build output never ends up in its own source archive. Both
/// paths are canonicalized first; an `exclude` that does not exist yet has
/// nothing to skip.
pub async fn create_source_archive(
    build_out: &Path,
    top_dir: &str,
    archive_path: &Path,
    exclude: Option<&Path>,
) -> Result<PathBuf> {
    if !build_out.is_dir() {
        return Err(Error::Fs {
            context: "reading build output",
            path: build_out.to_path_buf(),
            error: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "build output directory does not exist",
            ),
        });
    }

    let build_out = build_out.to_path_buf();
    let top_dir = PathBuf::from(top_dir);
    let archive_path = archive_path.to_path_buf();
    let exclude = exclude.map(Path::to_path_buf);

    tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        write_archive(&build_out, &top_dir, &archive_path, exclude.as_deref())?;
        Ok(archive_path)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
}

fn write_archive(
    build_out: &Path,
    top_dir: &Path,
    archive_path: &Path,
    exclude: Option<&Path>,
) -> Result<()> {
    let resolved = build_out
        .canonicalize()
        .fs_context("resolving build output", build_out)?;
    let build_out = resolved.as_path();
    let exclude = exclude.and_then(|path| path.canonicalize().ok());

    let file = File::create(archive_path).fs_context("creating source archive", archive_path)?;
    let mut archive = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    archive.follow_symlinks(false);

    archive
        .append_dir(top_dir, build_out)
        .fs_context("archiving build output", build_out)?;

    let walker = walkdir::WalkDir::new(build_out)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| exclude.as_deref().is_none_or(|skip| entry.path() != skip));

    for entry in walker {
        let entry = entry?;
        let name = top_dir.join(entry.path().strip_prefix(build_out)?);

        if entry.file_type().is_dir() {
            archive
                .append_dir(&name, entry.path())
                .fs_context("archiving directory", entry.path())?;
        } else {
            archive
                .append_path_with_name(entry.path(), &name)
                .fs_context("archiving file", entry.path())?;
        }
    }

    archive
        .into_inner()
        .and_then(GzEncoder::finish)
        .fs_context("finishing source archive", archive_path)?;

    log::debug!("Wrote source archive {}", archive_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    fn entries(archive: &Path) -> Vec<String> {
        let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        tar.entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().display().to_string())
            .collect()
    }

    #[tokio::test]
    async fn entries_are_rooted_at_top_dir() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        std::fs::create_dir_all(build.join("lib")).unwrap();
        std::fs::write(build.join("tkt-send"), b"elf").unwrap();
        std::fs::write(build.join("lib/libkt.a"), b"ar").unwrap();

        let archive = dir.path().join("pkg-1.0.tar.gz");
        create_source_archive(&build, "pkg-1.0", &archive, None)
            .await
            .unwrap();

        let names = entries(&archive);
        assert!(names.iter().all(|n| n.starts_with("pkg-1.0")));
        assert!(names.contains(&"pkg-1.0/tkt-send".to_string()));
        assert!(names.contains(&"pkg-1.0/lib/libkt.a".to_string()));
    }

    #[tokio::test]
    async fn excluded_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        std::fs::create_dir_all(build.join("bundle/rpm")).unwrap();
        std::fs::write(build.join("bundle/rpm/old.rpm"), b"rpm").unwrap();
        std::fs::write(build.join("kt-split"), b"elf").unwrap();

        let archive = dir.path().join("out.tar.gz");
        create_source_archive(&build, "pkg-1.0", &archive, Some(&build.join("bundle")))
            .await
            .unwrap();

        let names = entries(&archive);
        assert!(names.contains(&"pkg-1.0/kt-split".to_string()));
        assert!(!names.iter().any(|n| n.contains("bundle")));
    }

    #[tokio::test]
    async fn excluded_directory_matches_through_unnormalized_paths() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        std::fs::create_dir_all(build.join("dist")).unwrap();
        std::fs::create_dir_all(build.join("lib")).unwrap();
        std::fs::write(build.join("dist/old.rpm"), b"rpm").unwrap();
        std::fs::write(build.join("k-realm"), b"elf").unwrap();

        let archive = dir.path().join("out.tar.gz");
        let exclude = build.join("lib/../dist");
        create_source_archive(&build.join("."), "pkg-1.0", &archive, Some(&exclude))
            .await
            .unwrap();

        let names = entries(&archive);
        assert!(names.contains(&"pkg-1.0/k-realm".to_string()));
        assert!(!names.iter().any(|n| n.contains("old.rpm")));
    }

    #[tokio::test]
    async fn missing_build_output_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_source_archive(
            &dir.path().join("nope"),
            "pkg-1.0",
            &dir.path().join("a.tar.gz"),
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
    }
}
