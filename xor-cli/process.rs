//! High-level run orchestration for the xor CLI.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicUsize, Ordering};

use xor_core::pipeline::combine;
use xor_core::{CombineOptions, Input, RunContext, XorSummary};

use crate::config::CliConfig;
use crate::error::Result;
use crate::io::{stdout_sink, Progress};

/// Runs one XOR combine over the two validated input descriptors.
///
/// Orchestrates the complete workflow:
///
/// 1. Opens both sources (file handles or stdin)
/// 2. Builds the run context from the recorded-signal state and progress flag
/// 3. Drives the combine pipeline with stdout as the sink
/// 4. Emits the completion summary when progress is enabled
///
/// All diagnostics go to stderr; stdout carries only result bytes. A closed
/// downstream pipe ends the run successfully.
///
/// # Parameters
///
/// * `raw1` - First input descriptor (path or `-`)
/// * `raw2` - Second input descriptor (path or `-`)
/// * `config` - CLI configuration (progress, trailing-zero policy)
/// * `signal_state` - Recorded-signal state from [`crate::signals::install`]
///
/// # Returns
///
/// The [`XorSummary`] of the completed transform.
///
/// # Errors
///
/// Returns an error if a source cannot be opened, a read fails, a write
/// fails for any reason other than a broken pipe, or a termination signal
/// was recorded (surfaced as [`xor_core::Error::Interrupted`]).
pub fn run(
    raw1: &str,
    raw2: &str,
    config: &CliConfig,
    signal_state: &AtomicUsize,
) -> Result<XorSummary> {
    let progress = Progress::new(config.progress);

    let input1 = Input::parse(raw1);
    let input2 = Input::parse(raw2);

    // Exactly one stdin input on an interactive terminal: the run is about
    // to block waiting for typed input.
    if input1.is_stdin() != input2.is_stdin() && std::io::stdin().is_terminal() {
        progress.report("waiting for input from stdin...");
    }

    progress.report(format_args!("reading file1: {}", input1.display_name()));
    let source1 = input1.open()?;
    progress.report(format_args!("reading file2: {}", input2.display_name()));
    let source2 = input2.open()?;

    if std::io::stdout().is_terminal() {
        progress.report("warning: output going to terminal (consider redirecting to file)");
    }

    let options = CombineOptions::default().with_preserve_trailing_zeros(config.preserve_zeros);
    let cancelled = || signal_state.load(Ordering::Relaxed) != 0;
    let mut on_progress = |bytes: u64| progress.report(format_args!("processed {bytes} bytes"));

    let mut ctx = RunContext::new().with_cancellation(&cancelled);
    if progress.enabled() {
        ctx = ctx.with_progress(&mut on_progress);
    }

    progress.report("XORing input streams");
    let summary = combine(source1, source2, stdout_sink(), &options, &mut ctx)?;

    let zeros_note = if config.preserve_zeros {
        "preserved"
    } else {
        "after stripping trailing zeros"
    };
    progress.report(format_args!(
        "XOR complete: {} bytes processed, {} bytes {zeros_note}",
        summary.bytes_processed, summary.bytes_written
    ));

    Ok(summary)
}
