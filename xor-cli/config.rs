//! Configuration types and constants for the xor CLI.

/// Program name used as the prefix for all stderr diagnostics.
pub const PROG_NAME: &str = "xor";

/// Exit code for successful runs, including a closed downstream pipe.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for runtime failures (I/O errors, unexpected errors).
pub const EXIT_ERROR: i32 = 1;

/// Exit code for usage errors (bad arguments, failed input validation).
pub const EXIT_USAGE: i32 = 2;

/// Configuration for one xor run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfig {
    /// Report progress information on stderr.
    pub progress: bool,

    /// Keep trailing zero bytes in the output instead of stripping them.
    pub preserve_zeros: bool,
}
