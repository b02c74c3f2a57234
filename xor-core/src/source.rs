//! Byte source abstraction over files and standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command-line sentinel naming the standard-input stream.
pub const STDIN_SENTINEL: &str = "-";

/// Descriptor for one combine input: a filesystem path or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The process's standard-input stream.
    Stdin,
    /// A file on the filesystem.
    Path(PathBuf),
}

impl Input {
    /// Parses a raw command-line argument into an input descriptor.
    ///
    /// `-` selects standard input; anything else is treated as a path.
    pub fn parse(raw: &str) -> Self {
        if raw == STDIN_SENTINEL {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(raw))
        }
    }

    /// Returns `true` if this descriptor names standard input.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin)
    }

    /// Human-readable name for diagnostics: `stdin` or the path.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::Path(path) => path.display().to_string(),
        }
    }

    /// Opens the descriptor as a byte stream positioned at its start.
    ///
    /// # Returns
    ///
    /// An open [`Source`] ready for sequential chunked reads.
    ///
    /// # Errors
    ///
    /// Returns an error when a path cannot be opened:
    ///
    /// - [`Error::NotFound`] if the path does not exist
    /// - [`Error::PermissionDenied`] if the path is unreadable
    /// - [`Error::OpenFailed`] for any other I/O failure
    ///
    /// Standard input never produces an open error; a read on it simply
    /// blocks until data, end-of-stream, or a signal arrives.
    pub fn open(&self) -> Result<Source> {
        match self {
            Input::Stdin => Ok(Source {
                inner: Box::new(io::stdin()),
            }),
            Input::Path(path) => {
                let file = File::open(path).map_err(|source| match source.kind() {
                    io::ErrorKind::NotFound => Error::NotFound { path: path.clone() },
                    io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                        path: path.clone(),
                    },
                    _ => Error::OpenFailed {
                        path: path.clone(),
                        source,
                    },
                })?;
                Ok(Source {
                    inner: Box::new(file),
                })
            }
        }
    }

    /// Opens the descriptor as an asynchronous byte stream.
    ///
    /// # Errors
    ///
    /// Same error mapping as [`Input::open`].
    #[cfg(feature = "async")]
    pub async fn open_async(&self) -> Result<AsyncSource> {
        match self {
            Input::Stdin => Ok(AsyncSource {
                inner: Box::new(tokio::io::stdin()),
            }),
            Input::Path(path) => {
                let file = tokio::fs::File::open(path).await.map_err(|source| {
                    match source.kind() {
                        io::ErrorKind::NotFound => Error::NotFound { path: path.clone() },
                        io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                            path: path.clone(),
                        },
                        _ => Error::OpenFailed {
                            path: path.clone(),
                            source,
                        },
                    }
                })?;
                Ok(AsyncSource {
                    inner: Box::new(file),
                })
            }
        }
    }
}

/// An open byte stream ready for sequential chunked reads.
///
/// File-backed sources release their handle when dropped, on every exit path
/// of the combine loop.
pub struct Source {
    inner: Box<dyn Read>,
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Asynchronous counterpart of [`Source`].
#[cfg(feature = "async")]
pub struct AsyncSource {
    inner: Box<dyn tokio::io::AsyncRead + Unpin + Send>,
}

#[cfg(feature = "async")]
impl tokio::io::AsyncRead for AsyncSource {
    fn poll_read(
        self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
        buf: &mut tokio::io::ReadBuf<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        std::pin::Pin::new(self.get_mut().inner.as_mut()).poll_read(cx, buf)
    }
}
