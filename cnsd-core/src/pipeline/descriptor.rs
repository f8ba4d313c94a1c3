//! Multi-threshold structural descriptor (CNSD).
//!
//! For each of `S` steps the source matrix is binarized over
//! `[threshold_min, t_step]`, the degree of every node is computed, and two
//! features are appended: the maximum degree and the mean degree over all
//! nodes.
//!
//! The step formulas are part of the descriptor's definition, odd as they
//! look:
//!
//! - `step_size = (max - min) / (S + 1)`, so the last step stops short of `max`;
//! - `t_step = (max - min) - step_size * (step + 1)`, which never adds `min` back.
//!
//! Changing either changes every descriptor ever produced.

use std::ops::Sub;

use serde::{Deserialize, Serialize};
use tracing::{debug, enabled, trace, warn, Level};

use crate::config::CnsdConfig;
use crate::degree::DegreeCounter;
use crate::errors::Result;
use crate::matrix::{AdjacencyMatrix, BooleanMatrix, Weight};

/// Feature vector `[max_0, avg_0, max_1, avg_1, ...]`, two entries per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    features: Vec<f64>,
}

impl Descriptor {
    /// Empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty descriptor with room for `steps` steps.
    pub fn with_steps(steps: usize) -> Self {
        Self {
            features: Vec::with_capacity(2 * steps),
        }
    }

    /// Append the two features of one step.
    pub fn push_step(&mut self, max_degree: f64, mean_degree: f64) {
        self.features.push(max_degree);
        self.features.push(mean_degree);
    }

    /// All features in order.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of steps recorded.
    pub fn steps(&self) -> usize {
        self.features.len() / 2
    }

    /// `(max_degree, mean_degree)` of one step.
    pub fn step(&self, step: usize) -> Option<(f64, f64)> {
        let i = 2 * step;
        Some((*self.features.get(i)?, *self.features.get(i + 1)?))
    }

    /// `(max_degree, mean_degree)` per step, in step order.
    pub fn iter_steps(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.features.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Take the raw feature vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.features
    }
}

impl From<Descriptor> for Vec<f64> {
    fn from(d: Descriptor) -> Self {
        d.features
    }
}

/// Config-driven descriptor computation.
#[derive(Debug, Clone)]
pub struct DescriptorPipeline {
    config: CnsdConfig,
}

impl DescriptorPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: CnsdConfig) -> Self {
        Self { config }
    }

    /// Configuration this pipeline runs with.
    pub fn config(&self) -> &CnsdConfig {
        &self.config
    }

    /// Compute the descriptor of `matrix`.
    ///
    /// The configured thresholds are converted to `W` first, so integer
    /// matrices see truncated thresholds.
    pub fn run<W>(&self, matrix: &AdjacencyMatrix<W>) -> Result<Descriptor>
    where
        W: Weight + Sub<Output = W>,
    {
        self.config.validate()?;
        Ok(cnsd(
            matrix,
            self.config.steps,
            W::from_f64(self.config.threshold_min),
            W::from_f64(self.config.threshold_max),
        ))
    }
}

/// Compute the descriptor of `matrix` over `steps` thresholds.
///
/// `steps == 0` gives an empty descriptor. A matrix with no nodes gives
/// `0.0` for both features of every step.
///
/// For unsigned `W`, `threshold_min` must not exceed `threshold_max`.
pub fn cnsd<W>(
    matrix: &AdjacencyMatrix<W>,
    steps: usize,
    threshold_min: W,
    threshold_max: W,
) -> Descriptor
where
    W: Weight + Sub<Output = W>,
{
    let nodes = matrix.node_count();
    let width = (threshold_max - threshold_min).to_f64();
    let step_size = width / (steps as f64 + 1.0);

    if nodes == 0 && steps > 0 {
        warn!(steps, "descriptor of an empty matrix, mean degree defined as 0");
    }

    let mut desc = Descriptor::with_steps(steps);
    let mut connections = BooleanMatrix::default();

    for step in 0..steps {
        let threshold = W::from_f64(width - step_size * (step as f64 + 1.0));
        debug!(step, %threshold, "binarizing");

        matrix.binarize(&mut connections, threshold_min, threshold);
        if enabled!(Level::TRACE) {
            trace!("binarized matrix:\n{}", connections);
        }

        let degrees = DegreeCounter::count(&connections);
        debug!(step, ?degrees, "degrees");

        let max = degrees.iter().copied().max().unwrap_or(0) as f64;
        let mean = if nodes == 0 {
            0.0
        } else {
            degrees.iter().map(|&d| d as f64).sum::<f64>() / nodes as f64
        };
        debug!(step, max, avg = mean, "features");

        desc.push_step(max, mean);
    }

    desc
}
