//! SHA-256 digesting and hash-based random byte generation
//!
//! This crate provides two building blocks, the second layered on the
//! first:
//!
//! - a bit-exact, pure-Rust implementation of the SHA-256 compression
//!   algorithm (FIPS 180-4), exposed both as a one-shot digest function
//!   and as an explicit streaming state, and
//! - a random byte generator that expands a fresh OS-provided seed into
//!   an output of any requested length by hashing the seed together with
//!   an increasing counter.
//!
//! The focus is on **clarity, predictability, and auditability**: no heap
//! allocation in the hash core, no hidden global state, and explicit error
//! semantics at every fallible boundary.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-256 engine. [`hash::sha256()`] digests a full message in one
//!   call; [`hash::Sha256`] exposes the same computation as an
//!   `update`/`finalize` state object for callers that receive a message
//!   in chunks. Results are identical regardless of how a message is
//!   split across `update` calls.
//!
//! - `rng`  
//!   Random byte generation. [`rng::random_bytes`] draws a fresh 32-byte
//!   seed from the operating system on every call and expands it with the
//!   SHA-256 engine in counter mode. No seed or counter survives a call;
//!   each invocation is fully independent.
//!
//! - `os`  
//!   Platform-specific access to the operating system entropy source,
//!   selected at compile time. This is the only point in the crate that
//!   touches the environment, and the only one that can block.
//!
//! # Errors
//!
//! Fallible operations return [`Error`]: [`Error::InvalidInput`] for
//! arguments rejected before any computation, [`Error::EntropyUnavailable`]
//! when the OS entropy source cannot supply a seed. No partial results are
//! ever produced.
//!
//! # Design goals
//!
//! - No heap allocations in the hash core
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - One independent state per digest computation; safe to use from
//!   concurrent threads without any shared mutable state

mod error;
mod os;

pub mod hash;
pub mod rng;

pub use error::Error;
