//! Shared domain types.
//!
//! Parameter values are kept as a small closed enum rather than strings so the
//! table assembler can infer column kinds and sort numerically, and so the
//! manifest can serialize candidates with their natural JSON types.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single literal parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn text(s: impl Into<String>) -> Self {
        ParamValue::Text(s.into())
    }

    /// Numeric view of the value; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The narrowest column kind able to hold this value on its own.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ParamValue::Int(_) => ColumnKind::Int64,
            ParamValue::Float(_) => ColumnKind::Float64,
            ParamValue::Text(_) => ColumnKind::Object,
        }
    }

    /// Render the value as it appears in a column of the given kind.
    ///
    /// Integers in a `float64` column are widened (`0` becomes `0.0`).
    pub fn render(&self, kind: ColumnKind) -> String {
        match (self, kind) {
            (ParamValue::Int(v), ColumnKind::Float64) => format_float(*v as f64),
            (ParamValue::Int(v), _) => v.to_string(),
            (ParamValue::Float(v), _) => format_float(*v),
            (ParamValue::Text(s), _) => s.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.kind()))
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

/// Shortest round-tripping float literal, always with a fractional part for
/// integral values (`1.0`, `0.6`, `0.00390625`).
pub fn format_float(v: f64) -> String {
    format!("{v:?}")
}

/// Inferred storage kind of an output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Int64,
    Float64,
    Object,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Int64 => "int64",
            ColumnKind::Float64 => "float64",
            ColumnKind::Object => "object",
        }
    }

    /// Smallest kind able to hold values of both `self` and `other`.
    pub fn widen(self, other: ColumnKind) -> ColumnKind {
        match (self, other) {
            (ColumnKind::Object, _) | (_, ColumnKind::Object) => ColumnKind::Object,
            (ColumnKind::Float64, _) | (_, ColumnKind::Float64) => ColumnKind::Float64,
            _ => ColumnKind::Int64,
        }
    }
}

/// Ordered name → value mapping with unique names.
///
/// Field order is the insertion order and becomes the column order of the
/// exported table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamRecord {
    fields: Vec<(String, ParamValue)>,
}

impl ParamRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            fields: Vec::with_capacity(n),
        }
    }

    /// Build a record from literal pairs, rejecting duplicate names.
    pub fn from_fields<N, I>(fields: I) -> Result<Self, AppError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ParamValue)>,
    {
        let mut record = Self::new();
        for (name, value) in fields {
            record.insert(name, value)?;
        }
        Ok(record)
    }

    /// Append a field. A name already present is an internal error.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) -> Result<(), AppError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(AppError::internal(format!(
                "Duplicate parameter name '{name}' in record."
            )));
        }
        self.fields.push((name, value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn into_values(self) -> Vec<ParamValue> {
        self.fields.into_iter().map(|(_, v)| v).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Co-translational cleavage model of a variant group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CleaveModel {
    /// Cleavage at the same rate with or without a 5' collision.
    Simple,
    /// Cleavage only when the trailing ribosome has hit the stalled one.
    Hit5,
}

impl CleaveModel {
    pub const ALL: [CleaveModel; 2] = [CleaveModel::Simple, CleaveModel::Hit5];

    pub fn as_str(self) -> &'static str {
        match self {
            CleaveModel::Simple => "simple",
            CleaveModel::Hit5 => "hit5",
        }
    }
}

impl fmt::Display for CleaveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default TSV file name read by the simulator.
pub const DEFAULT_OUTPUT: &str = "sim.params.tsv";

/// Default stall elongation base rate (scaled by 6 in the table).
pub const DEFAULT_STALL_RATE: f64 = 0.1;

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub output: PathBuf,
    /// Base elongation rates at the stall site, one `k_elong_stall` value each.
    pub stall_rates: Vec<f64>,
    /// Variant groups to include, in output order.
    pub cleave_models: Vec<CleaveModel>,
    pub manifest: Option<PathBuf>,
    pub summary: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            stall_rates: vec![DEFAULT_STALL_RATE],
            cleave_models: CleaveModel::ALL.to_vec(),
            manifest: None,
            summary: true,
        }
    }
}
