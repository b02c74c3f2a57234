//! Output sink and diagnostics plumbing for the xor CLI.

use std::fmt;
use std::io;

use crate::config::PROG_NAME;

/// Buffer size for the stdout sink.
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Opens the buffered standard-output sink for the combined bytes.
///
/// Only raw result data is ever written here; diagnostics go to stderr.
pub fn stdout_sink() -> io::BufWriter<io::Stdout> {
    io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, io::stdout())
}

/// Progress reporter writing single prefixed lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    enabled: bool,
}

impl Progress {
    /// Creates a reporter; disabled reporters drop every message.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether reporting is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Writes one progress line when reporting is enabled.
    pub fn report(&self, message: impl fmt::Display) {
        if self.enabled {
            eprintln!("{PROG_NAME}: {message}");
        }
    }
}
