//! Per-run reductions over simulated dipole signals.
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::PipelineError;

/// Minimum of each run's dipole time series (one row per run).
///
/// A NaN anywhere in a run makes that run's minimum NaN. A signal with no
/// timesteps has no minimum and is rejected.
pub fn min_amplitude(signal: ArrayView2<f64>) -> Result<Array1<f64>, PipelineError> {
    let mut out = Array1::zeros(signal.nrows());
    for (run, row) in signal.outer_iter().enumerate() {
        out[run] = nan_propagating_min(row).ok_or(PipelineError::EmptySignal { run })?;
    }
    Ok(out)
}

fn nan_propagating_min(values: ArrayView1<f64>) -> Option<f64> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    }))
}
