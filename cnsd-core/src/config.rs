//! Configuration for the descriptor pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CnsdError, Result};

/// Parameters of one descriptor run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnsdConfig {
    /// Number of threshold steps; the descriptor holds two features per step.
    pub steps: usize,
    /// Lower edge of every binarization band.
    pub threshold_min: f64,
    /// Upper end of the threshold range.
    pub threshold_max: f64,
}

impl Default for CnsdConfig {
    fn default() -> Self {
        Self {
            steps: 3,
            threshold_min: 0.0,
            threshold_max: 1.0,
        }
    }
}

impl CnsdConfig {
    /// Read a JSON config. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds the step formulas cannot work with.
    ///
    /// An inverted range is accepted: every band is then empty.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_min.is_finite() || !self.threshold_max.is_finite() {
            return Err(CnsdError::Config(format!(
                "thresholds must be finite (min = {}, max = {})",
                self.threshold_min, self.threshold_max
            )));
        }
        Ok(())
    }
}
