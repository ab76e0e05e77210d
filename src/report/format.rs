//! Terminal summary of a generated table.
//!
//! Column listing in the familiar dataframe-info layout:
//!
//! ```text
//! RangeIndex: 90 entries, 0 to 89
//! Data columns (total 17 columns):
//!  #   Column   Non-Null Count  Dtype
//! ```

use std::collections::BTreeMap;

use crate::table::SweepTable;

/// Format the table summary printed after export.
pub fn format_table_summary(table: &SweepTable) -> String {
    let mut out = String::new();

    if table.is_empty() {
        out.push_str("RangeIndex: 0 entries\n");
    } else {
        out.push_str(&format!(
            "RangeIndex: {} entries, 0 to {}\n",
            table.len(),
            table.len() - 1
        ));
    }
    out.push_str(&format!(
        "Data columns (total {} columns):\n",
        table.columns().len()
    ));

    let name_width = table
        .columns()
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Column".len());

    out.push_str(
        format!(
            " {:<3} {:<name_width$}  {:<14}  {:<7}",
            "#", "Column", "Non-Null Count", "Dtype"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            " {:-<3} {:-<name_width$}  {:-<14}  {:-<7}",
            "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (i, c) in table.columns().iter().enumerate() {
        out.push_str(
            format!(
                " {:<3} {:<name_width$}  {:<14}  {:<7}",
                i,
                c.name,
                format!("{} non-null", c.non_null),
                c.kind.label()
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push_str(&format!("dtypes: {}\n", format_kind_tally(table)));
    out
}

/// Per-kind column counts, e.g. `float64(6), int64(7), object(4)`.
fn format_kind_tally(table: &SweepTable) -> String {
    let mut tally: BTreeMap<&'static str, usize> = BTreeMap::new();
    for c in table.columns() {
        *tally.entry(c.kind.label()).or_default() += 1;
    }
    tally
        .iter()
        .map(|(k, n)| format!("{k}({n})"))
        .collect::<Vec<_>>()
        .join(", ")
}
