//! Error taxonomy for the crate.
//!
//! Two failure classes exist: arguments rejected before any computation,
//! and the operating system entropy source failing to supply a seed.
//! There are no other runtime failure states; hash arithmetic is modular
//! and never errors.

use thiserror::Error;

/// Errors surfaced by the hashing and random generation APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is out of range.
    ///
    /// Detected synchronously, before any computation; the operation
    /// leaves no partial state behind.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The operating system could not supply entropy for a seed.
    ///
    /// Surfaced immediately and never retried internally; retry policy
    /// belongs to the caller.
    #[error("OS entropy source unavailable: {0}")]
    EntropyUnavailable(&'static str),
}
