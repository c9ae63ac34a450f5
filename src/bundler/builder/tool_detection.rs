//! External tool detection and availability checking.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves `program` to an executable path.
///
/// Bare names are searched on `PATH`; paths are checked in place.
pub fn locate_tool(program: &Path) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Using {} at {}", program.display(), path.display());
            Ok(path)
        }
        Err(e) => Err(Error::ToolNotFound {
            tool: program.display().to_string(),
            reason: format!(
                "{e}. Install rpm-build (e.g., dnf install rpm-build) or set [rpm] rpmbuild"
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_is_tool_not_found() {
        let err = locate_tool(Path::new("tktfwd-definitely-missing-tool")).unwrap_err();
        assert!(matches!(
            err,
            Error::ToolNotFound { ref tool, .. } if tool == "tktfwd-definitely-missing-tool"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_executable_is_accepted() {
        assert!(locate_tool(Path::new("/bin/sh")).is_ok());
    }
}
