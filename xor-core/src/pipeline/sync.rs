//! Synchronous XOR combine pipeline.

use std::io::{self, Read, Write};

use crate::config::{XorSummary, PROGRESS_CHUNK_INTERVAL};
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::options::CombineOptions;
use crate::strip::ZeroTailWriter;

/// Combines two byte sources with XOR and streams the result into a sink.
///
/// The sources are read in lock-step, one chunk from each per iteration,
/// until both are exhausted. Within an iteration the shorter chunk is
/// zero-padded to the longer one's length before the byte-wise XOR; across
/// the whole run this makes the combined output as long as the longer input.
/// The trailing-zero policy from `options` is applied through a bounded
/// lookback, so memory use stays proportional to the chunk size.
///
/// # Parameters
///
/// * `source1` - First input implementing [`Read`]
/// * `source2` - Second input implementing [`Read`]
/// * `sink` - Output destination implementing [`Write`]
/// * `options` - Chunk size and trailing-zero policy [`CombineOptions`]
/// * `ctx` - Cancellation and progress hooks [`RunContext`]
///
/// # Returns
///
/// Returns an [`XorSummary`] with bytes processed and bytes written.
///
/// A sink that reports a broken pipe ends the run successfully with the
/// bytes delivered so far; a closed downstream reader is expected behavior
/// for pipeline tools, not a failure.
///
/// # Errors
///
/// This function will return an error if:
///
/// - A source read fails ([`Error::Io`])
/// - A sink write or flush fails for any reason other than a broken pipe
/// - The run context reports cancellation ([`Error::Interrupted`])
pub fn combine<R1, R2, W>(
    mut source1: R1,
    mut source2: R2,
    sink: W,
    options: &CombineOptions,
    ctx: &mut RunContext<'_>,
) -> Result<XorSummary>
where
    R1: Read,
    R2: Read,
    W: Write,
{
    let chunk_size = options.chunk_size();
    let mut chunk1 = vec![0u8; chunk_size];
    let mut chunk2 = vec![0u8; chunk_size];
    let mut output = ZeroTailWriter::new(sink, options.preserve_trailing_zeros());
    let mut total = 0u64;
    let mut chunks = 0u64;

    loop {
        // Polled once per iteration; an in-flight read is never aborted.
        if ctx.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let read1 = fill_chunk(&mut source1, &mut chunk1)?;
        let read2 = fill_chunk(&mut source2, &mut chunk2)?;
        if read1 == 0 && read2 == 0 {
            break;
        }

        // Chunks are full except at end-of-stream, so lock-step offsets stay
        // aligned; the exhausted side contributes zero bytes.
        let len = read1.max(read2);
        if read1 < len {
            chunk1[read1..len].fill(0);
        }
        if read2 < len {
            chunk2[read2..len].fill(0);
        }
        for (byte, &mask) in chunk1[..len].iter_mut().zip(&chunk2[..len]) {
            *byte ^= mask;
        }
        total += len as u64;

        match output.write_chunk(&chunk1[..len]) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                return Ok(XorSummary::new(total, output.bytes_written()));
            }
            Err(err) => return Err(err.into()),
        }

        chunks += 1;
        if chunks % PROGRESS_CHUNK_INTERVAL == 0 {
            ctx.report_progress(total);
        }
    }

    match output.finish() {
        Ok(written) => Ok(XorSummary::new(total, written)),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            Ok(XorSummary::new(total, output.bytes_written()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads until `buf` is full or the reader reaches end-of-stream.
///
/// A short result therefore only ever means end-of-stream, which keeps the
/// two sources aligned even when one of them is a pipe delivering data in
/// small pieces.
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
