//! Read/write sweep manifest JSON files.
//!
//! A manifest records how a table was generated: the factor table, the
//! cleavage groups, and the sort keys. It carries no timestamps, so repeated
//! runs produce identical files just like the TSV.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ParamValue;
use crate::error::AppError;
use crate::grid::{FactorTable, VariantGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFactor {
    pub name: String,
    pub candidates: Vec<ParamValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepManifest {
    pub tool: String,
    pub output: PathBuf,
    pub rows: usize,
    pub factors: Vec<ManifestFactor>,
    pub cleave_groups: Vec<VariantGroup>,
    pub sort_keys: Vec<String>,
}

impl SweepManifest {
    pub fn new(
        output: &Path,
        rows: usize,
        factors: &FactorTable,
        groups: &[VariantGroup],
        sort_keys: &[&str],
    ) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            output: output.to_path_buf(),
            rows,
            factors: factors
                .factors()
                .iter()
                .map(|f| ManifestFactor {
                    name: f.name.clone(),
                    candidates: f.candidates.clone(),
                })
                .collect(),
            cleave_groups: groups.to_vec(),
            sort_keys: sort_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Write a manifest JSON file.
pub fn write_manifest_json(path: &Path, manifest: &SweepManifest) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create manifest '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, manifest)
        .map_err(|e| AppError::config(format!("Failed to write manifest JSON: {e}")))?;
    Ok(())
}

/// Read a manifest JSON file.
pub fn read_manifest_json(path: &Path) -> Result<SweepManifest, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open manifest '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::config(format!("Invalid manifest JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CleaveModel;
    use crate::grid::{translation_factors, variant_groups};

    #[test]
    fn manifest_lists_factors_and_groups() {
        let factors = translation_factors(&[0.1]).unwrap();
        let groups = variant_groups(&CleaveModel::ALL);
        let m = SweepManifest::new(Path::new("sim.params.tsv"), 90, &factors, &groups, &["n_stall", "k_init"]);

        assert_eq!(m.factors.len(), 10);
        assert_eq!(m.factors[0].name, "k_init");
        assert_eq!(m.cleave_groups[1].model, CleaveModel::Hit5);

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["cleave_groups"][0]["model"], "simple");
        assert_eq!(json["cleave_groups"][0]["rates"][0], 0);
        assert_eq!(json["factors"][8]["candidates"][0], "400,401,402,403,404,405");
    }

    #[test]
    fn manifest_file_reads_back() {
        let factors = translation_factors(&[0.02, 0.5]).unwrap();
        let groups = variant_groups(&[CleaveModel::Simple]);
        let m = SweepManifest::new(Path::new("out.tsv"), 90, &factors, &groups, &["n_stall"]);

        let path = std::env::temp_dir().join(format!("endocleave_sweep_manifest_{}.json", std::process::id()));
        write_manifest_json(&path, &m).unwrap();
        let back = read_manifest_json(&path).unwrap();
        assert_eq!(back, m);
        let _ = std::fs::remove_file(&path);
    }
}
