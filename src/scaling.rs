//! Forward (and inverse) linear scaling between the normalized prior domain
//! [0, 1] and a parameter's physical range.
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Physical-unit range of one prior parameter.
///
/// Serialized as a `[low, high]` pair; deserialization runs the same
/// validation as [`ParamBounds::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct ParamBounds {
    low: f64,
    high: f64,
}

impl ParamBounds {
    pub fn new(low: f64, high: f64) -> Result<Self, PipelineError> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(PipelineError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// For literal bounds already known to satisfy `low < high`.
    pub(crate) const fn new_unchecked(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Map one normalized value into `[low, high]`.
    ///
    /// 0 maps to `low` and 1 maps to `high` exactly; intermediate results are
    /// capped at `high` so rounding in `low + v * span` never leaves the range.
    /// The caller is responsible for `v` being in [0, 1].
    #[inline]
    pub fn forward(&self, v: f64) -> f64 {
        if v >= 1.0 {
            return self.high;
        }
        (self.low + v * self.span()).min(self.high)
    }

    #[inline]
    pub fn inverse(&self, x: f64) -> f64 {
        (x - self.low) / self.span()
    }
}

impl TryFrom<(f64, f64)> for ParamBounds {
    type Error = PipelineError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        ParamBounds::new(low, high)
    }
}

impl From<ParamBounds> for (f64, f64) {
    fn from(bounds: ParamBounds) -> Self {
        (bounds.low, bounds.high)
    }
}

/// Scale normalized values in [0, 1] into `bounds`.
///
/// Values outside the unit interval (NaN included) are rejected rather than
/// clipped. The returned error has an empty column name; callers that know
/// the column attach it with [`PipelineError::in_column`].
pub fn linear_scale_forward(
    values: ArrayView1<f64>,
    bounds: ParamBounds,
) -> Result<Array1<f64>, PipelineError> {
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        return Err(PipelineError::OutOfUnitInterval {
            column: String::new(),
            index,
            value,
        });
    }
    Ok(values.mapv(|v| bounds.forward(v)))
}

/// Map physical values back into the normalized domain.
pub fn linear_scale_inverse(values: ArrayView1<f64>, bounds: ParamBounds) -> Array1<f64> {
    values.mapv(|x| bounds.inverse(x))
}
