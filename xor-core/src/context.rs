//! Per-run context: cancellation polling and progress reporting.

/// Explicit run state handed to the combiner.
///
/// Carries an optional cancellation check, polled once at the top of every
/// loop iteration, and an optional progress callback invoked with cumulative
/// bytes processed at the reporting cadence. Both are borrowed for the
/// duration of one run, so no process-wide mutable state is involved.
#[derive(Default)]
pub struct RunContext<'a> {
    cancelled: Option<&'a dyn Fn() -> bool>,
    progress: Option<&'a mut dyn FnMut(u64)>,
}

impl<'a> RunContext<'a> {
    /// Creates a context with no cancellation check and no progress callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a cancellation check.
    ///
    /// The combiner polls the check once per iteration, before the next pair
    /// of reads; an in-flight read is never aborted mid-way.
    #[must_use]
    pub fn with_cancellation(mut self, check: &'a dyn Fn() -> bool) -> Self {
        self.cancelled = Some(check);
        self
    }

    /// Attaches a progress callback receiving cumulative bytes processed.
    #[must_use]
    pub fn with_progress(mut self, callback: &'a mut dyn FnMut(u64)) -> Self {
        self.progress = Some(callback);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.is_some_and(|check| check())
    }

    pub(crate) fn report_progress(&mut self, bytes_processed: u64) {
        if let Some(callback) = self.progress.as_mut() {
            callback(bytes_processed);
        }
    }
}
