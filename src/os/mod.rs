//! Operating system entropy layer
//!
//! This module is the crate's only boundary with the environment: it
//! obtains cryptographically secure random bytes from the operating
//! system for seeding the random byte generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same function
//! signature, so the rest of the crate stays fully portable.
//!
//! A failing entropy source is reported as
//! [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) rather
//! than handled here; whether and when to retry is the caller's decision.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
