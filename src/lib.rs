//! `endocleave-sweep` library crate.
//!
//! The binary (`sweep`) is a thin wrapper around this library so that:
//!
//! - the grid and table logic is testable without spawning processes
//! - other tools can build the same parameter table in-process

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod logging;
pub mod report;
pub mod table;
