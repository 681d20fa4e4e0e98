//! Indexed CSV writer.
//!
//! Output layout: a header row whose first cell is empty, then one row per
//! table row prefixed with its 0-based index. Values are written with
//! [`format_value`] so the same table always produces the same bytes.
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use ndarray::ArrayView2;

/// Floating-point width a column's values were read at.
///
/// Single-precision values are widened to `f64` for arithmetic, but are
/// written back at their source width so `0.1f32` prints as `0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Double,
    Single,
}

/// Format an `f64` as the shortest string that parses back to the same value.
///
/// Plain decimal notation is used for magnitudes in `[1e-4, 1e16)` (integral
/// values keep a trailing `.0`); scientific notation otherwise, with a signed
/// exponent of at least two digits (`1e-10`, `1e-05`, `1e+16`). NaN becomes
/// an empty field.
pub fn format_value(v: f64) -> String {
    format_value_as(v, Precision::Double)
}

/// Like [`format_value`], but shortest at the given source precision.
pub fn format_value_as(v: f64, precision: Precision) -> String {
    if v.is_nan() {
        return String::new();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = match precision {
        Precision::Double => format!("{:?}", v),
        Precision::Single => format!("{:?}", v as f32),
    };
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// Write `values` as CSV with a leading row-index column.
///
/// `columns` names the value columns and `precisions` gives the width each
/// one is printed at; both must match the number of columns in `values`.
pub fn write_indexed_csv<W: Write>(
    writer: W,
    columns: &[String],
    precisions: &[Precision],
    values: ArrayView2<f64>,
) -> Result<()> {
    if columns.len() != values.ncols() || precisions.len() != values.ncols() {
        return Err(anyhow!(
            "Table has {} value columns but {} column names and {} precisions",
            values.ncols(),
            columns.len(),
            precisions.len()
        ));
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push(String::new());
    header.extend(columns.iter().cloned());
    wtr.write_record(&header)
        .context("Failed to write CSV header")?;

    let mut record = Vec::with_capacity(columns.len() + 1);
    for (idx, row) in values.outer_iter().enumerate() {
        record.clear();
        record.push(idx.to_string());
        record.extend(
            row.iter()
                .zip(precisions)
                .map(|(&v, &precision)| format_value_as(v, precision)),
        );
        wtr.write_record(&record)
            .with_context(|| format!("Failed to write CSV row {}", idx))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
