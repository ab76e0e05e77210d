//! Translation factor table.
//!
//! Every simulation includes exactly one candidate from each factor below. The
//! candidates are literals except for three derived ones:
//! - `k_init` sweeps powers of two
//! - `x_stall` lists the stall codons as one comma-joined string
//! - `k_elong_stall` repeats the scaled stall rate once per stall codon

use crate::domain::{ParamValue, format_float};
use crate::error::AppError;

/// Exponent range of the initiation rate sweep (inclusive).
pub const K_INIT_EXP_MIN: i32 = -8;
pub const K_INIT_EXP_MAX: i32 = 0;

/// Number of consecutive stall codons.
pub const N_STALL: i64 = 6;
/// First stall codon position.
pub const FIRST_STALL_CODON: i64 = 400;

/// Elongation rates at the stall are given per site and scaled by this factor.
pub const STALL_RATE_SCALE: f64 = 6.0;
/// Decimal places kept after scaling.
pub const STALL_RATE_DECIMALS: i32 = 3;

/// One named parameter and its candidate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub name: String,
    pub candidates: Vec<ParamValue>,
}

/// Ordered set of factors; declaration order drives the cross product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorTable {
    factors: Vec<Factor>,
}

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a factor.
    ///
    /// Empty candidate lists are configuration errors; a repeated name is an
    /// internal error.
    pub fn push(&mut self, name: impl Into<String>, candidates: Vec<ParamValue>) -> Result<(), AppError> {
        let name = name.into();
        if candidates.is_empty() {
            return Err(AppError::config(format!(
                "Factor '{name}' has no candidate values."
            )));
        }
        if self.factors.iter().any(|f| f.name == name) {
            return Err(AppError::internal(format!("Factor '{name}' declared twice.")));
        }
        self.factors.push(Factor { name, candidates });
        Ok(())
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn get(&self, name: &str) -> Option<&Factor> {
        self.factors.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of records the cross product will produce.
    pub fn combination_count(&self) -> usize {
        self.factors.iter().map(|f| f.candidates.len()).product()
    }
}

/// `2^k` for every `k` in `min_exp..=max_exp`.
pub fn powers_of_two(min_exp: i32, max_exp: i32) -> Vec<f64> {
    (min_exp..=max_exp).map(|k| 2f64.powi(k)).collect()
}

/// Stall codon positions as a comma-joined string, e.g. `400,401,...`.
pub fn stall_positions(first: i64, count: i64) -> String {
    (first..first + count)
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Round half-to-even at the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Per-site stall elongation rates for one base rate.
///
/// `0.1` becomes `"0.6,0.6,0.6,0.6,0.6,0.6"`.
pub fn stall_elongation(rate: f64, sites: i64) -> Result<String, AppError> {
    if !rate.is_finite() {
        return Err(AppError::config(format!(
            "Invalid stall rate {rate}: must be finite."
        )));
    }
    let scaled = format_float(round_to(rate * STALL_RATE_SCALE, STALL_RATE_DECIMALS));
    Ok(vec![scaled; sites.max(0) as usize].join(","))
}

/// Build the translation factor table.
///
/// `stall_rates` supplies one `k_elong_stall` candidate per base rate.
pub fn translation_factors(stall_rates: &[f64]) -> Result<FactorTable, AppError> {
    if stall_rates.is_empty() {
        return Err(AppError::config("At least one stall rate is required."));
    }

    let k_init = powers_of_two(K_INIT_EXP_MIN, K_INIT_EXP_MAX)
        .into_iter()
        .map(ParamValue::Float)
        .collect();
    let k_elong_stall = stall_rates
        .iter()
        .map(|&r| stall_elongation(r, N_STALL).map(ParamValue::Text))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = FactorTable::new();
    table.push("k_init", k_init)?;
    table.push("k_preterm_no_hit_intact", vec![ParamValue::Int(0)])?;
    table.push("k_preterm_5_hit_intact", vec![ParamValue::Int(0)])?;
    table.push("k_preterm_3_hit_intact", vec![ParamValue::Int(0)])?;
    table.push("k_preterm_both_hit_intact", vec![ParamValue::Int(0)])?;
    table.push("preterm_intact_model", vec![ParamValue::text("trafficjam")])?;
    table.push("preterm_intact_rate", vec![ParamValue::Int(0)])?;
    table.push("n_stall", vec![ParamValue::Int(N_STALL)])?;
    table.push(
        "x_stall",
        vec![ParamValue::Text(stall_positions(FIRST_STALL_CODON, N_STALL))],
    )?;
    table.push("k_elong_stall", k_elong_stall)?;
    Ok(table)
}
