//! Input/output helpers.
//!
//! - TSV table export (`export`)
//! - sweep manifest JSON read/write (`manifest`)

pub mod export;
pub mod manifest;

pub use export::*;
pub use manifest::*;
