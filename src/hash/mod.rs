//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation, available
//! both as a one-shot function and as a streaming state object.

pub mod sha256;

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;

/// Re-export of the streaming SHA-256 state.
pub use sha256::core::Sha256;
