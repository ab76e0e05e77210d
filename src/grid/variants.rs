//! Co-translational cleavage variant groups.
//!
//! Each group fixes a cleavage model and sweeps a single rate. Endocleavage
//! happens `l_cleave` codons behind the A-site in both models.

use serde::{Deserialize, Serialize};

use crate::domain::{CleaveModel, ParamRecord, ParamValue};
use crate::error::AppError;

/// Codons behind the A-site at which cleavage occurs.
pub const L_CLEAVE: i64 = 5;

/// One cleavage model and the rates swept for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantGroup {
    pub model: CleaveModel,
    pub rates: Vec<ParamValue>,
}

impl VariantGroup {
    /// The fixed rate list for `model`.
    pub fn for_model(model: CleaveModel) -> Self {
        let rates = match model {
            CleaveModel::Simple => vec![
                ParamValue::Int(0),
                ParamValue::Float(0.0001),
                ParamValue::Float(0.0002),
                ParamValue::Float(0.001),
                ParamValue::Float(0.005),
            ],
            CleaveModel::Hit5 => vec![
                ParamValue::Float(0.0001),
                ParamValue::Float(0.0002),
                ParamValue::Float(0.001),
                ParamValue::Float(0.005),
                ParamValue::Float(0.01),
            ],
        };
        Self { model, rates }
    }

    /// Cleavage fields for one rate of this group.
    pub fn record(&self, rate: &ParamValue) -> Result<ParamRecord, AppError> {
        let zero = ParamValue::Int(0);
        let (no_hit, hit5, both_hit) = match self.model {
            CleaveModel::Simple => (rate.clone(), rate.clone(), zero.clone()),
            CleaveModel::Hit5 => (zero.clone(), rate.clone(), rate.clone()),
        };
        ParamRecord::from_fields([
            ("l_cleave", ParamValue::Int(L_CLEAVE)),
            ("k_cleave_no_hit", no_hit),
            ("k_cleave_5_hit", hit5),
            ("k_cleave_3_hit", zero),
            ("k_cleave_both_hit", both_hit),
            ("cleave_model", ParamValue::text(self.model.as_str())),
            ("cleave_rate", rate.clone()),
        ])
    }

    pub fn records(&self) -> Result<Vec<ParamRecord>, AppError> {
        self.rates.iter().map(|r| self.record(r)).collect()
    }
}

/// Groups for the requested models, in the given order.
pub fn variant_groups(models: &[CleaveModel]) -> Vec<VariantGroup> {
    models.iter().map(|&m| VariantGroup::for_model(m)).collect()
}

/// Concatenated variant records of all groups.
pub fn build_variants(groups: &[VariantGroup]) -> Result<Vec<ParamRecord>, AppError> {
    let mut out = Vec::new();
    for group in groups {
        out.extend(group.records()?);
    }
    Ok(out)
}
