//! Command-line front end for the streaming XOR combiner.
//!
//! This crate wires the `xor-core` pipeline to a Unix-style command-line
//! tool: argument validation, signal handling, progress diagnostics on
//! stderr, and exit-code mapping. The transform itself lives in `xor-core`;
//! everything here is glue around it.

pub mod config;
pub mod error;
pub mod io;
pub mod process;
pub mod signals;
pub mod validate;


pub use config::{CliConfig, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE, PROG_NAME};
pub use error::{Error, Result, UsageError};
pub use process::run;
pub use validate::validate_inputs;
