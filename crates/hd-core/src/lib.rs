//! # hd-core
//!
//! Error definitions shared across the holidays-rs workspace.
//!
//! Every other crate reports failures through the single [`Error`] enum
//! defined here so that callers can tell a rejected argument apart from a
//! rule that could not be evaluated.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
