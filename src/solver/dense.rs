// src/solver/dense.rs

use nalgebra::linalg::LU;
use nalgebra::{DMatrix, DVector, Dynamic};

use crate::error::{LaplaceError, Result};
use crate::solver::SolverConfig;
use crate::utils::dense_residual_norm;

/// Full LU factorization with partial pivoting of a dense matrix.
///
/// This is the naive baseline: it stores all `order^2` entries and costs
/// `O(order^3)` to factor regardless of sparsity.
#[derive(Debug, Clone)]
pub struct DenseLu {
    lu: LU<f64, Dynamic, Dynamic>,
    order: usize,
}

impl DenseLu {
    /// # Errors
    ///
    /// * `ShapeMismatch` if `matrix` is not square.
    /// * `SingularSystem` if `U` has a zero on its diagonal.
    pub fn factor(matrix: &DMatrix<f64>) -> Result<Self> {
        let order = matrix.nrows();
        if matrix.ncols() != order {
            return Err(LaplaceError::shape("system matrix columns", order, matrix.ncols()));
        }
        let lu = matrix.clone().lu();
        if !lu.is_invertible() {
            return Err(LaplaceError::singular("dense LU produced a zero pivot"));
        }
        Ok(DenseLu { lu, order })
    }

    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>> {
        if b.len() != self.order {
            return Err(LaplaceError::shape("right-hand side", self.order, b.len()));
        }
        self.lu
            .solve(b)
            .ok_or_else(|| LaplaceError::singular("dense LU solve failed"))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of scalars held by the packed L and U factors.
    pub fn storage_len(&self) -> usize {
        self.order * self.order
    }
}

/// Solves `A x = b` by dense LU and checks the residual.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>, config: &SolverConfig) -> Result<DVector<f64>> {
    let x = DenseLu::factor(a)?.solve(b)?;
    config.check_residual(dense_residual_norm(a, &x, b), b)?;
    Ok(x)
}
