//! Per-run output table: rescaled prior parameters plus derived features.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView1};

use crate::io::{write_indexed_csv, Precision};

/// Named columns over an `N runs x C` value matrix. Row order is run order.
///
/// `precisions` holds, per column, the width its values are printed at.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub columns: Vec<String>,
    pub precisions: Vec<Precision>,
    pub values: Array2<f64>,
}

impl OutputTable {
    /// Table whose columns are all printed at double precision.
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> Self {
        let precisions = vec![Precision::Double; columns.len()];
        Self {
            columns,
            precisions,
            values,
        }
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<f64>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.values.column(idx))
    }

    /// Set the print precision of column `name`; returns false if absent.
    pub fn set_precision(&mut self, name: &str, precision: Precision) -> bool {
        match self.columns.iter().position(|c| c == name) {
            Some(idx) => {
                self.precisions[idx] = precision;
                true
            }
            None => false,
        }
    }

    /// Serialize to `writer` as indexed CSV.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        write_indexed_csv(writer, &self.columns, &self.precisions, self.values.view())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        self.write_to(BufWriter::new(file))
            .with_context(|| format!("Failed to write output file: {}", path.display()))
    }
}
