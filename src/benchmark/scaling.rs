// src/benchmark/scaling.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::assembly::{assemble_operator, assemble_rhs};
use crate::error::Result;
use crate::grid::Grid;
use crate::input::InputDeck;
use crate::laplace::LaplaceOperator;
use crate::solver::{residual_norm, Strategy};

/// One timed run of a strategy at one grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingRecord {
    pub n: usize,
    pub strategy: Strategy,
    pub unknowns: usize,          // N^2
    pub matrix_storage: usize,    // scalars held by A
    pub factor_storage: usize,    // scalars held by the factors
    pub assemble_seconds: f64,
    pub solve_seconds: f64,       // factor + back-substitution
    pub residual: f64,            // ||A x - b||
}

/// Quantity of a record used for growth fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MatrixStorage,
    FactorStorage,
    AssembleTime,
    SolveTime,
}

impl Metric {
    fn value(self, record: &ScalingRecord) -> f64 {
        match self {
            Metric::MatrixStorage => record.matrix_storage as f64,
            Metric::FactorStorage => record.factor_storage as f64,
            Metric::AssembleTime => record.assemble_seconds,
            Metric::SolveTime => record.solve_seconds,
        }
    }
}

/// Times one strategy at one size, keeping the fastest of `repeats` runs.
pub fn measure(deck: &InputDeck, n: usize, strategy: Strategy) -> Result<ScalingRecord> {
    let mut best = run_once(deck, n, strategy)?;
    for _ in 1..deck.solver.repeats {
        let record = run_once(deck, n, strategy)?;
        if record.solve_seconds < best.solve_seconds {
            best = record;
        }
    }
    Ok(best)
}

fn run_once(deck: &InputDeck, n: usize, strategy: Strategy) -> Result<ScalingRecord> {
    let length = deck.grid.domain_length;
    let boundary = deck.boundary.as_fn(length);
    let grid = Grid::new(n, length)?;

    let start = Instant::now();
    let matrix = assemble_operator(&grid, strategy.encoding());
    let assemble_seconds = start.elapsed().as_secs_f64();
    drop(matrix);

    let start = Instant::now();
    let operator = LaplaceOperator::new(n, length, strategy, deck.solver.config)?;
    let field = operator.solve(&boundary)?;
    let solve_seconds = start.elapsed().as_secs_f64();

    let x = field.to_vector()?;
    let rhs = assemble_rhs(&grid, &boundary);
    Ok(ScalingRecord {
        n,
        strategy,
        unknowns: grid.n_points(),
        matrix_storage: operator.matrix_storage(),
        factor_storage: operator.factor_storage(),
        assemble_seconds,
        solve_seconds,
        residual: residual_norm(operator.matrix(), &x, &rhs),
    })
}

/// Runs every (size, strategy) pair of the deck.
///
/// Dense runs with `N > max_dense_n` are skipped with a warning, since the
/// dense matrix alone needs N^4 scalars.
pub fn run_scaling(deck: &InputDeck) -> Result<Vec<ScalingRecord>> {
    let mut records = Vec::new();
    for &n in &deck.grid.sizes {
        for &strategy in &deck.solver.strategies {
            if strategy == Strategy::Dense && n > deck.solver.max_dense_n {
                warn!(
                    "skipping dense run at N = {}: matrix would hold {} scalars",
                    n,
                    n.pow(4)
                );
                continue;
            }
            let record = measure(deck, n, strategy)?;
            info!(
                "N = {:4} {:>6}: assemble {:.3e} s, solve {:.3e} s, matrix {} / factor {} scalars",
                n,
                strategy.as_str(),
                record.assemble_seconds,
                record.solve_seconds,
                record.matrix_storage,
                record.factor_storage
            );
            records.push(record);
        }
    }
    Ok(records)
}

/// Least-squares slope of `log(metric)` against `log(N)` over the records of
/// one strategy. Returns `None` with fewer than two distinct sizes or a
/// non-positive metric value.
pub fn growth_exponent(records: &[ScalingRecord], strategy: Strategy, metric: Metric) -> Option<f64> {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter(|r| r.strategy == strategy)
        .map(|r| ((r.n as f64).ln(), metric.value(r)))
        .filter(|(_, v)| *v > 0.0)
        .map(|(x, v)| (x, v.ln()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let m = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / m;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / m;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    Some(sxy / sxx)
}

/// Writes the records as `scaling.yaml` under `folder`, creating it if needed.
pub fn write_records<P: AsRef<Path>>(records: &[ScalingRecord], folder: P) -> Result<PathBuf> {
    fs::create_dir_all(folder.as_ref())?;
    let path = folder.as_ref().join("scaling.yaml");
    fs::write(&path, serde_yaml::to_string(records)?)?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
