//! dipole-summary: per-run summary tables from simulated dipole runs.
//!
//! A prior parameter sample (normalized to [0, 1]) and the dipole signal
//! simulated for each sample are reduced to one CSV row per run: the
//! parameters rescaled into their physical ranges, followed by the minimum
//! dipole amplitude of the run.
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod pipeline;
pub mod scaling;
pub mod table;

pub use config::{PipelineConfig, PriorSpec};
pub use error::PipelineError;
pub use pipeline::{build_table, rescale_parameters, run_pipeline};
pub use table::OutputTable;
