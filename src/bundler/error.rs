//! Error types for bundling operations.
//!
//! Every failure the packaging workflow can hit maps to one variant of
//! [`Error`]. Helper traits attach filesystem context to I/O results
//! ([`ErrorExt`]) and turn `Option`/foreign errors into [`Error`] ([`Context`]).

use std::{fmt::Display, path::PathBuf};
use thiserror::Error as DeriveError;

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while staging and building a package.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// The host cannot produce packages. Permanent, never retried.
    #[error("unsupported platform: {reason}")]
    UnsupportedPlatform {
        /// Human readable description of the detected host
        reason: String,
    },

    /// I/O failure on a known path.
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },

    /// The package builder is not installed or not on `PATH`.
    #[error("`{tool}` not found in PATH: {reason}")]
    ToolNotFound {
        /// Executable that was searched for
        tool: String,
        /// Lookup failure
        reason: String,
    },

    /// The package builder could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command that failed to start
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// The package builder ran and reported failure.
    #[error("`{command}` failed with {}\n{stdout}{stderr}", exit_description(.code))]
    SubprocessFailure {
        /// Full command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// The spec template is malformed or references unknown tokens.
    #[error("template error: {0}")]
    TemplateError(String),

    /// The invocation was cancelled before it finished.
    #[error("packaging cancelled")]
    Cancelled,

    /// The requested build variant is not defined.
    #[error("unknown build variant `{name}` (known: {known})")]
    UnknownVariant {
        /// Requested name
        name: String,
        /// Comma separated list of defined variants
        known: String,
    },

    /// Directory walk failure.
    #[error("directory traversal failed: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// Path prefix stripping failure.
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(e: handlebars::TemplateError) -> Self {
        Error::TemplateError(e.to_string())
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(e: handlebars::RenderError) -> Self {
        Error::TemplateError(e.to_string())
    }
}

impl Error {
    /// Whether this failure is a problem with the external package builder.
    pub fn is_subprocess_failure(&self) -> bool {
        matches!(
            self,
            Error::SubprocessFailure { .. }
                | Error::ToolNotFound { .. }
                | Error::CommandFailed { .. }
        )
    }
}

/// Attaches filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Converts the error into [`Error::Fs`] carrying `context` and `path`.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Converts options and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Adds a message describing what was being attempted.
    fn context<C: Display + Send + Sync + 'static>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display + Send + Sync + 'static>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display + Send + Sync + 'static>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
