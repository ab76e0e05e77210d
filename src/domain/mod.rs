//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - literal parameter values and records (`ParamValue`, `ParamRecord`)
//! - output column kinds (`ColumnKind`)
//! - cleavage models and the resolved run configuration (`CleaveModel`, `SweepConfig`)

pub mod types;

pub use types::*;
