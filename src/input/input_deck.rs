// src/input/input_deck.rs
use serde::Deserialize;

use crate::boundary::BoundaryProfile;
use crate::solver::{SolverConfig, Strategy};

#[derive(Debug, Clone, Deserialize)]
pub struct GridSettings {
    pub sizes: Vec<usize>,             // N values to run, nodes per axis
    pub domain_length: f64,            // [-] side L of the square domain
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverSettings {
    pub strategies: Vec<Strategy>,     // dense and/or sparse
    #[serde(default = "default_repeats")]
    pub repeats: usize,                // timed runs per (N, strategy); fastest is kept
    #[serde(default = "default_max_dense_n")]
    pub max_dense_n: usize,            // dense runs above this N are skipped
    #[serde(flatten)]
    pub config: SolverConfig,          // residual_tolerance, pivot_tolerance
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub output_folder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputDeck {
    pub grid: GridSettings,
    pub solver: SolverSettings,
    #[serde(default)]
    pub boundary: BoundaryProfile,
    #[serde(default)]
    pub output: Option<OutputSettings>,
}

fn default_repeats() -> usize {
    1
}

fn default_max_dense_n() -> usize {
    40
}

impl Default for InputDeck {
    /// Sizes 10, 20, 40 on a 2 pi domain with cos(2 pi x / L) boundary data.
    fn default() -> Self {
        InputDeck {
            grid: GridSettings {
                sizes: vec![10, 20, 40],
                domain_length: 2.0 * std::f64::consts::PI,
            },
            solver: SolverSettings {
                strategies: vec![Strategy::Dense, Strategy::Sparse],
                repeats: default_repeats(),
                max_dense_n: default_max_dense_n(),
                config: SolverConfig::default(),
            },
            boundary: BoundaryProfile::default(),
            output: None,
        }
    }
}
