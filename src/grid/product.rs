//! Cartesian product over a factor table.

use crate::domain::ParamRecord;
use crate::error::AppError;
use crate::grid::factors::FactorTable;

/// Expand the factor table into one assignment per combination.
///
/// Order is the standard nested-loop order with the last-declared factor
/// varying fastest. An empty table yields a single empty assignment.
pub fn expand(table: &FactorTable) -> Result<Vec<ParamRecord>, AppError> {
    let factors = table.factors();
    let mut out = Vec::with_capacity(table.combination_count());
    let mut cursor = vec![0usize; factors.len()];

    loop {
        let mut record = ParamRecord::with_capacity(factors.len());
        for (factor, &i) in factors.iter().zip(&cursor) {
            record.insert(factor.name.clone(), factor.candidates[i].clone())?;
        }
        out.push(record);

        // Odometer step; done once the slowest digit wraps.
        let mut pos = factors.len();
        loop {
            if pos == 0 {
                return Ok(out);
            }
            pos -= 1;
            cursor[pos] += 1;
            if cursor[pos] < factors[pos].candidates.len() {
                break;
            }
            cursor[pos] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamValue;

    fn ints(v: &[i64]) -> Vec<ParamValue> {
        v.iter().map(|&x| ParamValue::Int(x)).collect()
    }

    #[test]
    fn last_factor_varies_fastest() {
        let mut table = FactorTable::new();
        table.push("a", ints(&[1, 2])).unwrap();
        table.push("b", ints(&[10, 20, 30])).unwrap();

        let records = expand(&table).unwrap();
        let pairs: Vec<(i64, i64)> = records
            .iter()
            .map(|r| match (r.get("a"), r.get("b")) {
                (Some(ParamValue::Int(a)), Some(ParamValue::Int(b))) => (*a, *b),
                _ => panic!("missing field"),
            })
            .collect();
        assert_eq!(
            pairs,
            vec![(1, 10), (1, 20), (1, 30), (2, 10), (2, 20), (2, 30)]
        );
    }

    #[test]
    fn count_matches_product_and_combinations_are_unique() {
        let mut table = FactorTable::new();
        table.push("a", ints(&[1, 2, 3])).unwrap();
        table.push("b", ints(&[1])).unwrap();
        table.push("c", ints(&[4, 5])).unwrap();

        let records = expand(&table).unwrap();
        assert_eq!(records.len(), table.combination_count());
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
            for other in &records[i + 1..] {
                assert_ne!(r, other);
            }
        }
    }

    #[test]
    fn empty_table_yields_one_empty_record() {
        let records = expand(&FactorTable::new()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }
}
