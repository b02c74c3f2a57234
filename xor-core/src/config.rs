//! Shared configuration primitives and types for XOR stream processing.

/// Default chunk size for lock-step source reads (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Number of chunks between progress reports (~1 MiB at the default chunk size).
pub const PROGRESS_CHUNK_INTERVAL: u64 = 16;

/// Statistical summary of a completed XOR combine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorSummary {
    /// Total number of combined bytes produced by the transform, equal to the
    /// length of the longer input.
    pub bytes_processed: u64,

    /// Total number of bytes delivered to the sink after the trailing-zero
    /// policy was applied.
    pub bytes_written: u64,
}

impl XorSummary {
    /// Creates a new summary with the specified byte counts.
    ///
    /// # Parameters
    ///
    /// * `bytes_processed` - Total combined bytes produced by the transform
    /// * `bytes_written` - Total bytes delivered to the sink
    ///
    /// # Returns
    ///
    /// A new [`XorSummary`] instance with the specified byte counts.
    pub(crate) const fn new(bytes_processed: u64, bytes_written: u64) -> Self {
        Self {
            bytes_processed,
            bytes_written,
        }
    }

    /// Number of trailing zero bytes withheld from the sink.
    ///
    /// Zero when preservation was enabled or the combined output did not end
    /// in zero bytes.
    pub fn bytes_stripped(&self) -> u64 {
        self.bytes_processed.saturating_sub(self.bytes_written)
    }
}
