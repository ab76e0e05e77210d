//! Human-readable reporting.
//!
//! Formatting lives here so the grid and table code stays free of terminal
//! layout concerns.

pub mod format;

pub use format::*;
