//! Error types and result handling for XOR combine operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type covering all failure modes in XOR operations.
#[derive(Debug)]
pub enum Error {
    /// The input path does not exist.
    NotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// The input path exists but is not readable by this process.
    PermissionDenied {
        /// Path that could not be read
        path: PathBuf,
    },

    /// Opening the input path failed for another reason.
    OpenFailed {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// I/O failure while reading a source or writing the sink.
    Io(io::Error),

    /// The run was cancelled by an external interruption.
    Interrupted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path } => write!(f, "file not found: {}", path.display()),
            Error::PermissionDenied { path } => {
                write!(f, "permission denied: {}", path.display())
            }
            Error::OpenFailed { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenFailed { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
