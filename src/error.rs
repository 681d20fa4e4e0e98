use std::error::Error;
use std::fmt;

/// Precondition failures raised while building the per-run table.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Parameter sample column count differs from the prior.
    ParameterCountMismatch { expected: usize, found: usize },
    /// Parameter sample and dipole signal disagree on the number of runs.
    RunCountMismatch { parameters: usize, signals: usize },
    /// A run has no timesteps, so it has no minimum.
    EmptySignal { run: usize },
    /// A normalized value lies outside [0, 1] (NaN included).
    OutOfUnitInterval {
        column: String,
        index: usize,
        value: f64,
    },
    InvalidBounds { low: f64, high: f64 },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineError::ParameterCountMismatch { expected, found } => write!(
                f,
                "Parameter sample has {} columns but the prior defines {} parameters",
                found, expected
            ),
            PipelineError::RunCountMismatch { parameters, signals } => write!(
                f,
                "Parameter sample has {} runs but dipole signal has {} runs",
                parameters, signals
            ),
            PipelineError::EmptySignal { run } => {
                write!(f, "Dipole signal for run {} has no timesteps", run)
            }
            PipelineError::OutOfUnitInterval {
                column,
                index,
                value,
            } => write!(
                f,
                "Normalized value {} at row {} of '{}' is outside [0, 1]",
                value, index, column
            ),
            PipelineError::InvalidBounds { low, high } => write!(
                f,
                "Invalid bounds ({}, {}): bounds and their span must be finite with low below high",
                low, high
            ),
        }
    }
}

impl PipelineError {
    /// Attach a column name to an [`PipelineError::OutOfUnitInterval`] error.
    pub fn in_column(self, name: &str) -> Self {
        match self {
            PipelineError::OutOfUnitInterval { index, value, .. } => {
                PipelineError::OutOfUnitInterval {
                    column: name.to_string(),
                    index,
                    value,
                }
            }
            other => other,
        }
    }
}

impl Error for PipelineError {}
