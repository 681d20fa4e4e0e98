//! Load -> rescale -> reduce -> write.
//!
//! `build_table` is the in-memory part and performs no I/O; `run_pipeline`
//! wraps it with the array loaders and the CSV writer.
use anyhow::{Context, Result};
use ndarray::{s, Array2, ArrayView2};

use crate::config::{PipelineConfig, PriorSpec, AMPLITUDE_COLUMN};
use crate::error::PipelineError;
use crate::features::min_amplitude;
use crate::io::{load_array, load_array_with_precision};
use crate::scaling::linear_scale_forward;
use crate::table::OutputTable;

/// Rescale every column of a normalized parameter sample into the physical
/// range of the matching prior parameter, in prior order.
pub fn rescale_parameters(
    sample: ArrayView2<f64>,
    prior: &PriorSpec,
) -> Result<Array2<f64>, PipelineError> {
    if sample.ncols() != prior.len() {
        return Err(PipelineError::ParameterCountMismatch {
            expected: prior.len(),
            found: sample.ncols(),
        });
    }

    let mut out = Array2::zeros(sample.raw_dim());
    for (idx, param) in prior.iter().enumerate() {
        let scaled = linear_scale_forward(sample.column(idx), param.bounds)
            .map_err(|e| e.in_column(&param.name))?;
        log::debug!(
            "Rescaled '{}' into [{}, {}]",
            param.name,
            param.bounds.low(),
            param.bounds.high()
        );
        out.column_mut(idx).assign(&scaled);
    }
    Ok(out)
}

/// Assemble the per-run table: rescaled parameters followed by the
/// minimum dipole amplitude of each run. All columns print at double
/// precision.
pub fn build_table(
    sample: ArrayView2<f64>,
    signal: ArrayView2<f64>,
    prior: &PriorSpec,
) -> Result<OutputTable, PipelineError> {
    let params = rescale_parameters(sample, prior)?;
    if sample.nrows() != signal.nrows() {
        return Err(PipelineError::RunCountMismatch {
            parameters: sample.nrows(),
            signals: signal.nrows(),
        });
    }
    let amplitude = min_amplitude(signal)?;

    let n_params = prior.len();
    let mut values = Array2::zeros((sample.nrows(), n_params + 1));
    values.slice_mut(s![.., ..n_params]).assign(&params);
    values.column_mut(n_params).assign(&amplitude);

    let mut columns = prior.names();
    columns.push(AMPLITUDE_COLUMN.to_string());

    Ok(OutputTable::new(columns, values))
}

/// Run the whole pipeline described by `config` and return the table that
/// was written.
pub fn run_pipeline(config: &PipelineConfig) -> Result<OutputTable> {
    let theta = load_array(&config.theta_path).context("Failed to load parameter sample")?;
    let dipole = load_array_with_precision(&config.dipole_path)
        .context("Failed to load dipole signal")?;
    log::info!(
        "Loaded parameter sample {:?} from {} and dipole signal {:?} from {}",
        theta.dim(),
        config.theta_path.display(),
        dipole.values.dim(),
        config.dipole_path.display()
    );

    let mut table = build_table(theta.view(), dipole.values.view(), &config.prior)
        .context("Failed to build amplitude table")?;
    // The amplitude is an element of the signal, so it keeps the signal's width.
    table.set_precision(AMPLITUDE_COLUMN, dipole.precision);

    table.write_csv(&config.output_path)?;
    log::info!(
        "Wrote {} runs x {} columns to {}",
        table.nrows(),
        table.ncols(),
        config.output_path.display()
    );
    Ok(table)
}
