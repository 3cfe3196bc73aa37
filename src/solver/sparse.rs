// src/solver/sparse.rs

use nalgebra::DVector;
use nalgebra_sparse::csr::CsrMatrix;

use crate::error::Result;
use crate::solver::banded::BandedLu;
use crate::solver::SolverConfig;
use crate::utils::csr_residual_norm;

/// Solves `A x = b` by banded LU on the CSR pattern and checks the residual.
/// `A` is never materialized densely.
pub fn solve(a: &CsrMatrix<f64>, b: &DVector<f64>, config: &SolverConfig) -> Result<DVector<f64>> {
    let x = BandedLu::factor(a, config.pivot_tolerance)?.solve(b)?;
    config.check_residual(csr_residual_norm(a, &x, b), b)?;
    Ok(x)
}
