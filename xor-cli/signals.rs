//! Signal handling for the xor CLI.
//!
//! Signal delivery only records which signal arrived; handlers never
//! terminate the process themselves. The top-level controller observes the
//! recorded signal once the combine loop has returned and performs exit-code
//! mapping and cleanup in one place.

use std::io;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::flag;

/// Signals that end an xor run.
const TERMINATION_SIGNALS: [i32; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Installs handlers recording the most recent termination signal.
///
/// # Returns
///
/// Shared state holding zero until a signal arrives, then the signal number.
/// The combine loop polls it as its cancellation check.
///
/// # Errors
///
/// Returns an error if a handler cannot be registered.
pub fn install() -> io::Result<Arc<AtomicUsize>> {
    let state = Arc::new(AtomicUsize::new(0));
    for signal in TERMINATION_SIGNALS {
        flag::register_usize(signal, Arc::clone(&state), signal as usize)?;
    }
    Ok(state)
}

/// Maps a recorded signal number to the conventional `128 + N` exit code.
pub fn exit_code(signal: usize) -> i32 {
    128 + signal as i32
}

/// Single-word description used in the final diagnostic line.
pub fn describe(signal: usize) -> &'static str {
    match signal as i32 {
        SIGINT => "interrupted",
        SIGTERM => "terminated",
        SIGHUP => "hangup",
        _ => "received signal",
    }
}
