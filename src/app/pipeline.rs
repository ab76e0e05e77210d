//! The table-building pipeline, without any output side effects.
//!
//! factor table -> cross product -> variant groups -> merge -> sort

use tracing::debug;

use crate::domain::SweepConfig;
use crate::error::AppError;
use crate::grid::{FactorTable, VariantGroup};
use crate::table::{SORT_KEYS, SweepTable};

/// Everything computed by one run.
#[derive(Debug, Clone)]
pub struct SweepRun {
    pub factors: FactorTable,
    pub groups: Vec<VariantGroup>,
    pub table: SweepTable,
}

/// Build the sorted parameter table for `config`.
pub fn build_sweep(config: &SweepConfig) -> Result<SweepRun, AppError> {
    // 1) Translation factors and their cross product.
    let factors = crate::grid::translation_factors(&config.stall_rates)?;
    let assignments = crate::grid::expand(&factors)?;
    debug!(
        factors = factors.len(),
        assignments = assignments.len(),
        "expanded translation factors"
    );

    // 2) Cleavage variants.
    let groups = crate::grid::variant_groups(&config.cleave_models);
    let variants = crate::grid::build_variants(&groups)?;
    debug!(
        groups = groups.len(),
        variants = variants.len(),
        "built cleavage variants"
    );

    // 3) Pair both families, then sort.
    let merged = crate::grid::merge_all(&assignments, &variants)?;
    let table = SweepTable::assemble(merged, &SORT_KEYS)?;
    debug!(rows = table.len(), columns = table.columns().len(), "assembled table");

    Ok(SweepRun {
        factors,
        groups,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CleaveModel, ParamValue};

    fn stock() -> SweepTable {
        build_sweep(&SweepConfig::default()).unwrap().table
    }

    fn f(table: &SweepTable, row: usize, name: &str) -> f64 {
        table.value(row, name).and_then(ParamValue::as_f64).unwrap()
    }

    #[test]
    fn stock_table_has_ninety_rows_and_seventeen_columns() {
        let table = stock();
        assert_eq!(table.len(), 90);
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "k_init",
                "k_preterm_no_hit_intact",
                "k_preterm_5_hit_intact",
                "k_preterm_3_hit_intact",
                "k_preterm_both_hit_intact",
                "preterm_intact_model",
                "preterm_intact_rate",
                "n_stall",
                "x_stall",
                "k_elong_stall",
                "l_cleave",
                "k_cleave_no_hit",
                "k_cleave_5_hit",
                "k_cleave_3_hit",
                "k_cleave_both_hit",
                "cleave_model",
                "cleave_rate",
            ]
        );
    }

    #[test]
    fn cleave_models_respect_their_zero_rates() {
        let table = stock();
        for row in 0..table.len() {
            let model = table.value(row, "cleave_model").and_then(|v| v.as_str()).unwrap();
            assert_eq!(f(&table, row, "k_cleave_3_hit"), 0.0);
            match model {
                "simple" => assert_eq!(f(&table, row, "k_cleave_both_hit"), 0.0),
                "hit5" => assert_eq!(f(&table, row, "k_cleave_no_hit"), 0.0),
                other => panic!("unexpected cleave model {other}"),
            }
        }
    }

    #[test]
    fn rows_are_sorted_by_n_stall_then_k_init() {
        let table = stock();
        for row in 1..table.len() {
            let prev = (f(&table, row - 1, "n_stall"), f(&table, row - 1, "k_init"));
            let cur = (f(&table, row, "n_stall"), f(&table, row, "k_init"));
            assert!(prev <= cur, "row {row} out of order");
        }
    }

    #[test]
    fn each_k_init_appears_once_per_variant() {
        let table = stock();
        for k in -8..=0 {
            let target = 2f64.powi(k);
            let n = (0..table.len()).filter(|&r| f(&table, r, "k_init") == target).count();
            assert_eq!(n, 10, "k_init = {target}");
        }
    }

    #[test]
    fn stall_columns_are_constant_strings() {
        let table = stock();
        for row in 0..table.len() {
            assert_eq!(
                table.value(row, "x_stall").and_then(|v| v.as_str()),
                Some("400,401,402,403,404,405")
            );
            assert_eq!(
                table.value(row, "k_elong_stall").and_then(|v| v.as_str()),
                Some("0.6,0.6,0.6,0.6,0.6,0.6")
            );
        }
    }

    #[test]
    fn stable_sort_keeps_variant_order_within_k_init() {
        let table = stock();
        let models: Vec<&str> = (0..10)
            .map(|r| table.value(r, "cleave_model").and_then(|v| v.as_str()).unwrap())
            .collect();
        assert_eq!(&models[..5], &["simple"; 5]);
        assert_eq!(&models[5..], &["hit5"; 5]);
        assert_eq!(f(&table, 0, "cleave_rate"), 0.0);
        assert_eq!(f(&table, 0, "k_cleave_no_hit"), 0.0);
        assert_eq!(f(&table, 0, "k_cleave_5_hit"), 0.0);
    }

    #[test]
    fn three_stall_rates_give_270_rows() {
        let config = SweepConfig {
            stall_rates: vec![0.02, 0.1, 0.5],
            ..SweepConfig::default()
        };
        assert_eq!(build_sweep(&config).unwrap().table.len(), 270);
    }

    #[test]
    fn single_model_filter_halves_the_table() {
        let config = SweepConfig {
            cleave_models: vec![CleaveModel::Simple],
            ..SweepConfig::default()
        };
        let table = build_sweep(&config).unwrap().table;
        assert_eq!(table.len(), 45);
    }

    #[test]
    fn empty_stall_rates_is_a_config_error() {
        let config = SweepConfig {
            stall_rates: Vec::new(),
            ..SweepConfig::default()
        };
        assert_eq!(build_sweep(&config).unwrap_err().exit_code(), 2);
    }
}
