use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scaling::ParamBounds;

/// Default location of the prior parameter sample (N runs x 8 parameters).
pub const DEFAULT_THETA_PATH: &str = "../data/theta_sim_fitted_prior_1.npy";
/// Default location of the simulated dipole signals (N runs x T timesteps).
pub const DEFAULT_DIPOLE_PATH: &str = "../data/dpl_sim_fitted_prior_1.npy";
pub const DEFAULT_OUTPUT_PATH: &str = "../data/beta_event_amplitude.csv";

/// Name of the derived column appended after the prior parameters.
pub const AMPLITUDE_COLUMN: &str = "amplitude";

/// One named prior parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PriorParam {
    pub name: String,
    pub bounds: ParamBounds,
}

/// Ordered prior: defines both the column order of the parameter sample and
/// the physical range each column is rescaled into.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct PriorSpec {
    params: Vec<PriorParam>,
}

impl PriorSpec {
    pub fn new(params: Vec<PriorParam>) -> Self {
        Self { params }
    }

    /// Build from `(name, low, high)` triples, validating every bound pair.
    pub fn from_triples(triples: &[(&str, f64, f64)]) -> Result<Self> {
        let mut params = Vec::with_capacity(triples.len());
        for &(name, low, high) in triples {
            let bounds = ParamBounds::new(low, high)
                .with_context(|| format!("Invalid bounds for prior parameter '{}'", name))?;
            params.push(PriorParam {
                name: name.to_string(),
                bounds,
            });
        }
        Ok(Self { params })
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriorParam> {
        self.params.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<ParamBounds> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.bounds)
    }
}

impl Default for PriorSpec {
    fn default() -> Self {
        let gbar = ParamBounds::new_unchecked(1e-10, 1e-1);
        let sigma = ParamBounds::new_unchecked(1.0, 100.0);
        let onset = ParamBounds::new_unchecked(200.0, 300.0);

        let entries = [
            ("gbar_evprox_1_L2Pyr_ampa", gbar),
            ("gbar_evprox_1_L5Pyr_ampa", gbar),
            ("gbar_evdist_1_L2Pyr_ampa", gbar),
            ("gbar_evdist_1_L5Pyr_ampa", gbar),
            ("sigma_t_evprox_1", sigma),
            ("sigma_t_evdist_1", sigma),
            ("t_evprox_1", onset),
            ("t_evdist_1", onset),
        ];
        Self {
            params: entries
                .iter()
                .map(|&(name, bounds)| PriorParam {
                    name: name.to_string(),
                    bounds,
                })
                .collect(),
        }
    }
}

/// Input/output locations and prior for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub theta_path: PathBuf,
    pub dipole_path: PathBuf,
    pub output_path: PathBuf,
    pub prior: PriorSpec,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            theta_path: PathBuf::from(DEFAULT_THETA_PATH),
            dipole_path: PathBuf::from(DEFAULT_DIPOLE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            prior: PriorSpec::default(),
        }
    }
}

impl PipelineConfig {
    /// Resolve all paths against `dir`, keeping the default prior.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            theta_path: dir.join("theta_sim_fitted_prior_1.npy"),
            dipole_path: dir.join("dpl_sim_fitted_prior_1.npy"),
            output_path: dir.join("beta_event_amplitude.csv"),
            prior: PriorSpec::default(),
        }
    }
}

/// Load a pipeline configuration from a JSON file.
pub fn load_pipeline_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PipelineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
