// src/solver/mod.rs

//! Dense and sparse direct solvers for the assembled system.

pub mod banded;
pub mod dense;
pub mod sparse;

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::assembly::{Encoding, LinearSystem, SystemMatrix};
use crate::error::{LaplaceError, Result};
use crate::utils::{csr_residual_norm, dense_residual_norm};

pub use banded::BandedLu;
pub use dense::DenseLu;

/// Solver strategy selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// LU of the full N^2 x N^2 matrix.
    Dense,
    /// Banded LU on the compressed-row matrix.
    Sparse,
}

impl Strategy {
    /// Matrix encoding this strategy consumes.
    pub fn encoding(self) -> Encoding {
        match self {
            Strategy::Dense => Encoding::Dense,
            Strategy::Sparse => Encoding::Sparse,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Sparse => "sparse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub residual_tolerance: f64, // ||Ax - b|| <= tol * max(||b||, 1)
    pub pivot_tolerance: f64,    // relative to the largest matrix entry (sparse path)
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            residual_tolerance: 1e-8,
            pivot_tolerance: f64::EPSILON,
        }
    }
}

impl SolverConfig {
    /// Accepts a solution whose residual is within tolerance, otherwise
    /// reports the system as singular.
    pub fn check_residual(&self, residual: f64, b: &DVector<f64>) -> Result<()> {
        let limit = self.residual_tolerance * b.norm().max(1.0);
        debug!("residual = {:e}, limit = {:e}", residual, limit);
        if residual.is_finite() && residual <= limit {
            Ok(())
        } else {
            Err(LaplaceError::singular(format!(
                "residual {:e} exceeds tolerance {:e}",
                residual, limit
            )))
        }
    }
}

/// A factored system matrix, reusable for any number of right-hand sides.
#[derive(Debug, Clone)]
pub enum Factorization {
    Dense(DenseLu),
    Banded(BandedLu),
}

impl Factorization {
    /// Factors `matrix` with the strategy matching its encoding.
    pub fn new(matrix: &SystemMatrix, config: &SolverConfig) -> Result<Self> {
        match matrix {
            SystemMatrix::Dense(a) => Ok(Factorization::Dense(DenseLu::factor(a)?)),
            SystemMatrix::Sparse(a) => Ok(Factorization::Banded(BandedLu::factor(
                a,
                config.pivot_tolerance,
            )?)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Factorization::Dense(_) => Strategy::Dense,
            Factorization::Banded(_) => Strategy::Sparse,
        }
    }

    /// Back-substitutes for one right-hand side. Does not check the residual.
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>> {
        match self {
            Factorization::Dense(lu) => lu.solve(b),
            Factorization::Banded(lu) => lu.solve(b),
        }
    }

    /// Number of scalars held by the factors.
    pub fn storage_len(&self) -> usize {
        match self {
            Factorization::Dense(lu) => lu.storage_len(),
            Factorization::Banded(lu) => lu.storage_len(),
        }
    }
}

/// `||A x - b||` for either encoding.
pub fn residual_norm(matrix: &SystemMatrix, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    match matrix {
        SystemMatrix::Dense(a) => dense_residual_norm(a, x, b),
        SystemMatrix::Sparse(a) => csr_residual_norm(a, x, b),
    }
}

/// Solves an assembled system with the strategy matching its encoding.
///
/// # Errors
///
/// * `ShapeMismatch` if the right-hand side does not match the matrix order.
/// * `SingularSystem` if factorization fails or the residual is too large.
pub fn solve(system: &LinearSystem, config: &SolverConfig) -> Result<DVector<f64>> {
    match &system.matrix {
        SystemMatrix::Dense(a) => dense::solve(a, &system.rhs, config),
        SystemMatrix::Sparse(a) => sparse::solve(a, &system.rhs, config),
    }
}
