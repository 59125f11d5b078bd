//! Random byte generation
//!
//! This module produces random bytes of any requested length by expanding
//! operating system entropy with the SHA-256 engine.
//!
//! Design goals:
//! - a fresh seed from the OS on every call, no state retained between
//!   invocations
//! - deterministic expansion from any fixed seed, so tests can inject one
//! - exact output length, for any length including zero
//! - seed material wiped once it has been consumed

mod generator;

pub use generator::{expand_seed, random_bytes};
