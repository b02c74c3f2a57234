//! Error types for xor CLI operations.

use thiserror::Error;

use crate::config::{EXIT_ERROR, EXIT_USAGE};

/// Usage errors detected by argument validation, before the transform runs.
///
/// These always terminate the process with exit code 2.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Input path does not exist
    #[error("{description} not found: {path}")]
    InputNotFound {
        /// Which positional argument failed ("first input file", ...)
        description: &'static str,
        /// The offending path
        path: String,
    },

    /// Input path is not a regular file, FIFO, or character device
    #[error("{description} is not a readable file: {path}")]
    NotReadableFile {
        /// Which positional argument failed
        description: &'static str,
        /// The offending path
        path: String,
    },

    /// Input path exists but cannot be read
    #[error("cannot read {description}: {path}")]
    InputNotReadable {
        /// Which positional argument failed
        description: &'static str,
        /// The offending path
        path: String,
    },

    /// Both positional arguments name standard input
    #[error("cannot read multiple files from stdin")]
    MultipleStdin,

    /// Both positional arguments refer to the same underlying file
    #[error("cannot use the same file for both inputs")]
    SameFileInputs,
}

/// Specialized `Result` type for xor CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xor CLI runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad invocation, caught before the core transform runs.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Failure reported while opening a source or running the combine loop.
    #[error(transparent)]
    Transform(#[from] xor_core::Error),
}

impl Error {
    /// Maps the error to its process exit code.
    ///
    /// Interruption is not mapped here; the top-level controller derives the
    /// 128+N code from the recorded signal instead.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => EXIT_USAGE,
            Error::Transform(_) => EXIT_ERROR,
        }
    }
}
