//! Pair translation assignments with cleavage variants.

use crate::domain::ParamRecord;
use crate::error::AppError;

/// Disjoint union of two records: `left` fields first, then `right`.
///
/// A name present in both is an internal error naming the field.
pub fn merge_records(left: &ParamRecord, right: &ParamRecord) -> Result<ParamRecord, AppError> {
    let mut merged = left.clone();
    for (name, value) in right.iter() {
        if merged.contains(name) {
            return Err(AppError::internal(format!(
                "Parameter '{name}' is set by both a translation factor and a cleavage variant."
            )));
        }
        merged.insert(name, value.clone())?;
    }
    Ok(merged)
}

/// Every assignment combined with every variant.
///
/// Outer loop over `assignments`, inner loop over `variants`; position in the
/// result is the pre-sort global index.
pub fn merge_all(assignments: &[ParamRecord], variants: &[ParamRecord]) -> Result<Vec<ParamRecord>, AppError> {
    let mut out = Vec::with_capacity(assignments.len() * variants.len());
    for a in assignments {
        for v in variants {
            out.push(merge_records(a, v)?);
        }
    }
    Ok(out)
}
