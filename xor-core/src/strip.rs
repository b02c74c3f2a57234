//! Trailing-zero handling for the combined output stream.

use std::io::{self, Write};

/// Scratch block used when a withheld zero run must be materialized.
const ZERO_BLOCK: [u8; 8192] = [0; 8192];

/// A writer adapter that withholds the current run of trailing zero bytes.
///
/// Zero bytes are forwarded only once a later non-zero byte proves they are
/// interior to the stream; the run at the very end is either materialized or
/// discarded by [`finish`](Self::finish), depending on the preservation
/// policy. Lookback state is a single counter, so memory use is independent
/// of stream length.
pub struct ZeroTailWriter<W: Write> {
    inner: W,
    pending_zeros: u64,
    preserve: bool,
    bytes_written: u64,
}

impl<W: Write> ZeroTailWriter<W> {
    /// Wraps `inner`, preserving the final zero run when `preserve` is set.
    pub fn new(inner: W, preserve: bool) -> Self {
        Self {
            inner,
            pending_zeros: 0,
            preserve,
            bytes_written: 0,
        }
    }

    /// Total bytes forwarded to the underlying writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn materialize_pending_zeros(&mut self) -> io::Result<()> {
        while self.pending_zeros > 0 {
            let block = ZERO_BLOCK
                .len()
                .min(usize::try_from(self.pending_zeros).unwrap_or(usize::MAX));
            self.inner.write_all(&ZERO_BLOCK[..block])?;
            self.pending_zeros -= block as u64;
            self.bytes_written += block as u64;
        }
        Ok(())
    }

    /// Forwards one combined chunk, withholding any new trailing zero run.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        match chunk.iter().rposition(|&byte| byte != 0) {
            Some(last) => {
                // The withheld run turned out to be interior to the stream.
                self.materialize_pending_zeros()?;
                self.inner.write_all(&chunk[..=last])?;
                self.bytes_written += (last + 1) as u64;
                self.pending_zeros = (chunk.len() - last - 1) as u64;
            }
            None => {
                self.pending_zeros += chunk.len() as u64;
            }
        }
        Ok(())
    }

    /// Applies the end-of-stream policy to the withheld run and flushes.
    ///
    /// # Returns
    ///
    /// Total bytes delivered to the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates write and flush failures from the underlying writer.
    pub fn finish(&mut self) -> io::Result<u64> {
        if self.preserve {
            self.materialize_pending_zeros()?;
        } else {
            self.pending_zeros = 0;
        }
        self.inner.flush()?;
        Ok(self.bytes_written)
    }
}

/// Asynchronous counterpart of [`ZeroTailWriter`].
#[cfg(feature = "async")]
pub struct AsyncZeroTailWriter<W> {
    inner: W,
    pending_zeros: u64,
    preserve: bool,
    bytes_written: u64,
}

#[cfg(feature = "async")]
impl<W: tokio::io::AsyncWrite + Unpin> AsyncZeroTailWriter<W> {
    /// Wraps `inner`, preserving the final zero run when `preserve` is set.
    pub fn new(inner: W, preserve: bool) -> Self {
        Self {
            inner,
            pending_zeros: 0,
            preserve,
            bytes_written: 0,
        }
    }

    /// Total bytes forwarded to the underlying writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    async fn materialize_pending_zeros(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;

        while self.pending_zeros > 0 {
            let block = ZERO_BLOCK
                .len()
                .min(usize::try_from(self.pending_zeros).unwrap_or(usize::MAX));
            self.inner.write_all(&ZERO_BLOCK[..block]).await?;
            self.pending_zeros -= block as u64;
            self.bytes_written += block as u64;
        }
        Ok(())
    }

    /// Forwards one combined chunk, withholding any new trailing zero run.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;

        match chunk.iter().rposition(|&byte| byte != 0) {
            Some(last) => {
                self.materialize_pending_zeros().await?;
                self.inner.write_all(&chunk[..=last]).await?;
                self.bytes_written += (last + 1) as u64;
                self.pending_zeros = (chunk.len() - last - 1) as u64;
            }
            None => {
                self.pending_zeros += chunk.len() as u64;
            }
        }
        Ok(())
    }

    /// Applies the end-of-stream policy to the withheld run and flushes.
    ///
    /// # Errors
    ///
    /// Propagates write and flush failures from the underlying writer.
    pub async fn finish(&mut self) -> io::Result<u64> {
        use tokio::io::AsyncWriteExt;

        if self.preserve {
            self.materialize_pending_zeros().await?;
        } else {
            self.pending_zeros = 0;
        }
        self.inner.flush().await?;
        Ok(self.bytes_written)
    }
}
