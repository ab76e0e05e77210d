//! Table assembly: column kinds, composite-key sort, and row relabeling.

use std::cmp::Ordering;

use crate::domain::{ColumnKind, ParamRecord, ParamValue};
use crate::error::AppError;

/// Sort columns, most significant first.
pub const SORT_KEYS: [&str; 2] = ["n_stall", "k_init"];

/// Column metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
}

/// Sorted parameter table. Row labels are row positions (`0..len`).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable {
    columns: Vec<Column>,
    rows: Vec<Vec<ParamValue>>,
}

impl SweepTable {
    /// Collect merged records and stable-sort them by `sort_keys` ascending.
    ///
    /// All records must expose the same names in the same order.
    pub fn assemble(records: Vec<ParamRecord>, sort_keys: &[&str]) -> Result<Self, AppError> {
        let names: Vec<String> = records
            .first()
            .map(|r| r.names().map(str::to_string).collect())
            .unwrap_or_default();

        let mut rows = Vec::with_capacity(records.len());
        for (idx, record) in records.into_iter().enumerate() {
            if !record.names().eq(names.iter().map(String::as_str)) {
                return Err(AppError::internal(format!(
                    "Record {idx} does not match the column layout of record 0."
                )));
            }
            rows.push(record.into_values());
        }

        let columns = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column {
                name,
                kind: infer_kind(rows.iter().map(|row| &row[i])),
                non_null: rows.len(),
            })
            .collect();

        let mut table = Self { columns, rows };
        table.sort_by_columns(sort_keys)?;
        Ok(table)
    }

    /// Stable ascending sort on the named columns.
    ///
    /// An empty table has no columns, so there is nothing to look up.
    pub fn sort_by_columns(&mut self, keys: &[&str]) -> Result<(), AppError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let key_idx = keys
            .iter()
            .map(|k| {
                self.column_index(k)
                    .ok_or_else(|| AppError::internal(format!("Sort column '{k}' is missing.")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.rows.sort_by(|a, b| {
            key_idx
                .iter()
                .map(|&i| compare_values(&a[i], &b[i]))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<ParamValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn value(&self, row: usize, name: &str) -> Option<&ParamValue> {
        let col = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// All values of one column in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&ParamValue>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[col]).collect())
    }

    /// Row cells rendered according to their column kind.
    pub fn rendered_row(&self, row: usize) -> Option<Vec<String>> {
        let cells = self.rows.get(row)?;
        Some(
            cells
                .iter()
                .zip(&self.columns)
                .map(|(v, c)| v.render(c.kind))
                .collect(),
        )
    }
}

fn infer_kind<'a>(values: impl Iterator<Item = &'a ParamValue>) -> ColumnKind {
    values
        .map(ParamValue::kind)
        .reduce(ColumnKind::widen)
        .unwrap_or(ColumnKind::Object)
}

/// Numbers compare numerically and sort before text.
fn compare_values(a: &ParamValue, b: &ParamValue) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.as_str().cmp(&b.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(n_stall: i64, k_init: f64, tag: &str) -> ParamRecord {
        ParamRecord::from_fields([
            ("k_init", ParamValue::Float(k_init)),
            ("n_stall", ParamValue::Int(n_stall)),
            ("tag", ParamValue::text(tag)),
        ])
        .unwrap()
    }

    #[test]
    fn sorts_by_n_stall_then_k_init_stably() {
        let records = vec![
            rec(6, 0.5, "a"),
            rec(3, 1.0, "b"),
            rec(6, 0.25, "c"),
            rec(6, 0.5, "d"),
            rec(3, 0.5, "e"),
        ];
        let table = SweepTable::assemble(records, &SORT_KEYS).unwrap();
        let tags: Vec<&str> = table
            .column_values("tag")
            .unwrap()
            .into_iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["e", "b", "c", "a", "d"]);
    }

    #[test]
    fn kinds_are_inferred_per_column() {
        let records = vec![
            ParamRecord::from_fields([("x", ParamValue::Int(0)), ("n_stall", ParamValue::Int(6)), ("k_init", ParamValue::Float(1.0))]).unwrap(),
            ParamRecord::from_fields([("x", ParamValue::Float(0.5)), ("n_stall", ParamValue::Int(6)), ("k_init", ParamValue::Float(1.0))]).unwrap(),
        ];
        let table = SweepTable::assemble(records, &SORT_KEYS).unwrap();
        let kinds: Vec<ColumnKind> = table.columns().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ColumnKind::Float64, ColumnKind::Int64, ColumnKind::Float64]);
        assert_eq!(table.rendered_row(0).unwrap(), vec!["0.0", "6", "1.0"]);
    }

    #[test]
    fn ragged_records_are_rejected() {
        let records = vec![
            rec(6, 0.5, "a"),
            ParamRecord::from_fields([("k_init", ParamValue::Float(1.0))]).unwrap(),
        ];
        let err = SweepTable::assemble(records, &SORT_KEYS).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INTERNAL);
    }

    #[test]
    fn missing_sort_column_is_an_error() {
        let records = vec![ParamRecord::from_fields([("k_init", ParamValue::Float(1.0))]).unwrap()];
        assert!(SweepTable::assemble(records, &SORT_KEYS).is_err());
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = SweepTable::assemble(Vec::new(), &SORT_KEYS).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }
}
