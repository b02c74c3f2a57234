//! Configuration builder for XOR combine operations.

use std::num::NonZeroUsize;

use crate::config::DEFAULT_CHUNK_SIZE;

/// Configuration builder for a single combine run.
#[derive(Debug, Clone)]
pub struct CombineOptions {
    chunk_size: NonZeroUsize,
    preserve_trailing_zeros: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap(),
            preserve_trailing_zeros: false,
        }
    }
}

impl CombineOptions {
    /// Sets the chunk size used for lock-step source reads.
    ///
    /// Memory use of the pipeline is proportional to this value, not to the
    /// total input size. The default is 64 KiB.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Controls the trailing-zero policy for the combined output.
    ///
    /// When `false` (default), the maximal suffix of zero bytes at the very
    /// end of the combined output is withheld from the sink. When `true`,
    /// the output is delivered verbatim.
    #[must_use]
    pub fn with_preserve_trailing_zeros(mut self, preserve: bool) -> Self {
        self.preserve_trailing_zeros = preserve;
        self
    }

    /// Chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Whether trailing zero bytes are preserved.
    pub fn preserve_trailing_zeros(&self) -> bool {
        self.preserve_trailing_zeros
    }
}
