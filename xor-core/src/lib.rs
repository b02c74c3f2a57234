//! # xor-core
//!
//! Streaming XOR combine pipeline for byte sources.
//!
//! This crate provides the core transform behind the `xor` command-line tool:
//! two byte sources (files or standard input) are read in lock-step, chunk by
//! chunk, combined with byte-wise XOR while zero-padding the shorter stream,
//! and streamed to a sink with optional stripping of trailing zero bytes.
//! Both synchronous and asynchronous pipelines are offered; memory use is
//! bounded by the chunk size regardless of input length.

pub mod config;
pub mod context;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod source;
pub mod strip;

pub use config::{XorSummary, DEFAULT_CHUNK_SIZE, PROGRESS_CHUNK_INTERVAL};
pub use context::RunContext;
pub use error::{Error, Result};
pub use options::CombineOptions;
pub use source::{Input, Source};
