//! # sched-core
//!
//! Foundation shared by the periodic-schedule crates: the low-level error
//! type, the `ensure!` / `fail!` macros and string parsing helpers used by the
//! date and convention types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Parsers for dates and tenor strings.
pub mod parsers;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
