//! Asynchronous XOR combine pipeline.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::{XorSummary, PROGRESS_CHUNK_INTERVAL};
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::options::CombineOptions;
use crate::strip::AsyncZeroTailWriter;

/// Combines two byte sources with XOR asynchronously.
///
/// Behaves exactly like [`combine`](crate::pipeline::combine) but over
/// [`AsyncRead`] sources and an [`AsyncWrite`] sink.
///
/// # Parameters
///
/// * `source1` - First input implementing [`AsyncRead`] + [`Unpin`]
/// * `source2` - Second input implementing [`AsyncRead`] + [`Unpin`]
/// * `sink` - Output destination implementing [`AsyncWrite`] + [`Unpin`]
/// * `options` - Chunk size and trailing-zero policy [`CombineOptions`]
/// * `ctx` - Cancellation and progress hooks [`RunContext`]
///
/// # Returns
///
/// Returns an [`XorSummary`] with bytes processed and bytes written. A sink
/// reporting a broken pipe ends the run successfully.
///
/// # Errors
///
/// This function will return an error if:
///
/// - A source read fails ([`Error::Io`])
/// - A sink write or flush fails for any reason other than a broken pipe
/// - The run context reports cancellation ([`Error::Interrupted`])
pub async fn combine_async<R1, R2, W>(
    mut source1: R1,
    mut source2: R2,
    sink: W,
    options: &CombineOptions,
    ctx: &mut RunContext<'_>,
) -> Result<XorSummary>
where
    R1: AsyncRead + Unpin,
    R2: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let chunk_size = options.chunk_size();
    let mut chunk1 = vec![0u8; chunk_size];
    let mut chunk2 = vec![0u8; chunk_size];
    let mut output = AsyncZeroTailWriter::new(sink, options.preserve_trailing_zeros());
    let mut total = 0u64;
    let mut chunks = 0u64;

    loop {
        if ctx.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let read1 = fill_chunk_async(&mut source1, &mut chunk1).await?;
        let read2 = fill_chunk_async(&mut source2, &mut chunk2).await?;
        if read1 == 0 && read2 == 0 {
            break;
        }

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

        match output.write_chunk(&chunk1[..len]).await {
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

    match output.finish().await {
        Ok(written) => Ok(XorSummary::new(total, written)),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            Ok(XorSummary::new(total, output.bytes_written()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads until `buf` is full or the reader reaches end-of-stream.
async fn fill_chunk_async<R: AsyncRead + Unpin>(
    reader: &mut R,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let read = reader.read(&mut buf[filled..]).await?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(filled)
}
