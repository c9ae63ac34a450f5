//! rpmbuild execution.

use super::staging::StagingTree;
use crate::bundler::{
    builder::tool_detection::locate_tool,
    error::{Error, Result},
};
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    process::{Child, Command},
};
use tokio_util::sync::CancellationToken;

/// Captured output of a successful rpmbuild run.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Arguments passed to rpmbuild for a binary-only build.
pub fn rpmbuild_args(staging: &StagingTree, spec_path: &Path) -> Vec<String> {
    vec![
        "--define".to_string(),
        format!("_topdir {}", staging.root().display()),
        "-bb".to_string(),
        spec_path.display().to_string(),
    ]
}

/// Runs rpmbuild against the staging tree.
///
/// Output is captured line by line; stdout is echoed at debug level. When
/// `cancel` fires the child is killed and reaped before returning
/// [`Error::Cancelled`].
pub async fn run_rpmbuild(
    rpmbuild: &Path,
    staging: &StagingTree,
    spec_path: &Path,
    cancel: &CancellationToken,
) -> Result<BuildOutput> {
    let program = locate_tool(rpmbuild)?;
    let args = rpmbuild_args(staging, spec_path);
    let command = format!("{} {}", program.display(), args.join(" "));

    log::info!("Running {command}");

    let mut cmd = Command::new(&program);
    cmd.args(&args)
        .current_dir(staging.root())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    // Own process group, so cancellation reaches scriptlet shells too.
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|error| Error::CommandFailed {
        command: command.clone(),
        error,
    })?;

    let stdout = tokio::spawn(capture_lines(child.stdout.take(), true));
    let stderr = tokio::spawn(capture_lines(child.stderr.take(), false));

    let status = tokio::select! {
        status = child.wait() => status.map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?,
        _ = cancel.cancelled() => {
            log::warn!("Cancellation requested, terminating rpmbuild");
            terminate(&mut child).await;
            return Err(Error::Cancelled);
        }
    };

    let output = BuildOutput {
        stdout: join_capture(stdout).await?,
        stderr: join_capture(stderr).await?,
    };

    if !status.success() {
        return Err(Error::SubprocessFailure {
            command,
            code: status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    Ok(output)
}

/// Kills the builder's process group, then the builder itself, and reaps it.
async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id().and_then(|pid| i32::try_from(pid).ok()) {
        use nix::{
            sys::signal::{Signal, killpg},
            unistd::Pid,
        };

        if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
            log::debug!("Failed to signal rpmbuild process group {pid}: {e}");
        }
    }

    if let Err(e) = child.kill().await {
        log::warn!("Failed to kill rpmbuild: {e}");
    }
}

/// Reads `stream` to EOF and returns everything it carried.
///
/// Bytes that are not UTF-8 are replaced rather than ending the read, so the
/// child never sees a closed pipe.
async fn capture_lines<R>(stream: Option<R>, echo: bool) -> String
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let Some(stream) = stream else {
        return String::new();
    };

    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                if echo {
                    let text = String::from_utf8_lossy(&line);
                    log::debug!("rpmbuild: {}", text.trim_end_matches(['\r', '\n']));
                }
                captured.extend_from_slice(&line);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("Failed to read rpmbuild output: {e}");
                break;
            }
        }
    }
    String::from_utf8_lossy(&captured).into_owned()
}

async fn join_capture(handle: tokio::task::JoinHandle<String>) -> Result<String> {
    handle
        .await
        .map_err(|e| Error::GenericError(format!("Output capture task panicked: {}", e)))
}

/// Collects the `.rpm` files rpmbuild wrote below `dir`, sorted by path.
pub fn collect_packages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut packages = Vec::new();
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "rpm")
        {
            packages.push(entry.into_path());
        }
    }
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn args_point_rpmbuild_at_the_staging_root() {
        let tree = StagingTree::create(None).await.unwrap();
        let spec = tree.specs_dir().join("treadmill-tktfwd.spec");
        let args = rpmbuild_args(&tree, &spec);

        assert_eq!(args[0], "--define");
        assert_eq!(args[1], format!("_topdir {}", tree.root().display()));
        assert_eq!(args[2], "-bb");
        assert_eq!(args[3], spec.display().to_string());
    }

    #[tokio::test]
    async fn missing_tool_is_reported_not_panicked() {
        let tree = StagingTree::create(None).await.unwrap();
        let err = run_rpmbuild(
            Path::new("tktfwd-no-such-rpmbuild"),
            &tree,
            &tree.specs_dir().join("x.spec"),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::ToolNotFound { .. }));
        assert!(err.is_subprocess_failure());
    }

    #[test]
    fn collects_only_rpm_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("x86_64")).unwrap();
        std::fs::write(dir.path().join("x86_64/a-1-1.x86_64.rpm"), b"").unwrap();
        std::fs::write(dir.path().join("x86_64/notes.txt"), b"").unwrap();

        let packages = collect_packages(dir.path()).unwrap();
        assert_eq!(packages, [dir.path().join("x86_64/a-1-1.x86_64.rpm")]);
    }
}
