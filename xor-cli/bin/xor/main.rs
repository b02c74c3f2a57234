//! Streaming XOR combiner
//!
//! Combines two byte sources with byte-wise XOR and writes the raw result to
//! standard output, padding the shorter source with zeros. Trailing zero
//! bytes are stripped from the output unless preservation is requested.

use std::process;
use std::sync::atomic::Ordering;

mod opts;

use opts::XorOpts;

use xor_cli::{run, signals, validate_inputs, Error, EXIT_ERROR, EXIT_USAGE, PROG_NAME};

fn main() {
    let signal_state = match signals::install() {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{PROG_NAME}: cannot install signal handlers: {err}");
            process::exit(EXIT_ERROR);
        }
    };

    let opts = XorOpts::parse();
    let config = opts.config();

    if let Err(err) = validate_inputs(opts.file1(), opts.file2()) {
        eprintln!("{PROG_NAME}: {err}");
        process::exit(EXIT_USAGE);
    }

    match run(opts.file1(), opts.file2(), &config, &signal_state) {
        Ok(_) => {}
        Err(Error::Transform(xor_core::Error::Interrupted)) => {
            let signal = signal_state.load(Ordering::Relaxed);
            eprintln!("{PROG_NAME}: {}", signals::describe(signal));
            process::exit(signals::exit_code(signal));
        }
        Err(err) => {
            eprintln!("{PROG_NAME}: {err}");
            process::exit(err.exit_code());
        }
    }
}
