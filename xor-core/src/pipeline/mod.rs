//! Pipeline module for XOR combine operations.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::combine_async;
pub use sync::combine;
