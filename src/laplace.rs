// src/laplace.rs

//! Entry points that take grid parameters and a boundary function and
//! return the solved field.

use std::ops::Index;

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::assembly::{assemble, assemble_operator, assemble_rhs, SystemMatrix};
use crate::error::Result;
use crate::grid::{to_field, to_vector, Grid};
use crate::solver::{self, residual_norm, Factorization, SolverConfig, Strategy};

/// Solution of the Dirichlet problem, indexed by grid coordinate `(i, j)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaplaceField {
    grid: Grid,
    values: DMatrix<f64>,
}

impl LaplaceField {
    /// Wraps a flat solution vector.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` if `x.len() != N^2`.
    pub fn from_vector(grid: Grid, x: &DVector<f64>) -> Result<Self> {
        let values = to_field(x, grid.n())?;
        Ok(LaplaceField { grid, values })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Value at node (i, j).
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Flat solution vector, `x[i * N + j]`.
    pub fn to_vector(&self) -> Result<DVector<f64>> {
        to_vector(&self.values, self.grid.n())
    }

    /// Largest `|f[i-1][j] + f[i+1][j] + f[i][j-1] + f[i][j+1] - 4 f[i][j]|`
    /// over the interior nodes.
    pub fn max_stencil_residual(&self) -> f64 {
        let n = self.grid.n();
        let f = &self.values;
        let mut worst = 0.0_f64;
        for i in 1..n.saturating_sub(1) {
            for j in 1..n - 1 {
                let r = f[(i - 1, j)] + f[(i + 1, j)] + f[(i, j - 1)] + f[(i, j + 1)]
                    - 4.0 * f[(i, j)];
                worst = worst.max(r.abs());
            }
        }
        worst
    }
}

impl Index<(usize, usize)> for LaplaceField {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.values[index]
    }
}

/// Solves the Laplace problem on an `n` x `n` grid with the given strategy.
pub fn solve_with<F>(
    n: usize,
    length: f64,
    boundary: F,
    strategy: Strategy,
    config: &SolverConfig,
) -> Result<LaplaceField>
where
    F: Fn(f64, f64) -> f64,
{
    let system = assemble(n, length, boundary, strategy.encoding())?;
    let x = solver::solve(&system, config)?;
    LaplaceField::from_vector(system.grid, &x)
}

/// Dense LU path with default tolerances.
pub fn dense_solve<F>(n: usize, length: f64, boundary: F) -> Result<LaplaceField>
where
    F: Fn(f64, f64) -> f64,
{
    solve_with(n, length, boundary, Strategy::Dense, &SolverConfig::default())
}

/// Sparse banded path with default tolerances.
pub fn sparse_solve<F>(n: usize, length: f64, boundary: F) -> Result<LaplaceField>
where
    F: Fn(f64, f64) -> f64,
{
    solve_with(n, length, boundary, Strategy::Sparse, &SolverConfig::default())
}

/// The system matrix of one grid, factored once and reused for any
/// number of boundary functions.
#[derive(Debug, Clone)]
pub struct LaplaceOperator {
    grid: Grid,
    matrix: SystemMatrix,
    factors: Factorization,
    config: SolverConfig,
}

impl LaplaceOperator {
    /// Assembles and factors the operator.
    ///
    /// # Errors
    ///
    /// * `InvalidGrid` / `InvalidDomain` for bad grid parameters.
    /// * `SingularSystem` if the factorization fails.
    pub fn new(n: usize, length: f64, strategy: Strategy, config: SolverConfig) -> Result<Self> {
        let grid = Grid::new(n, length)?;
        let matrix = assemble_operator(&grid, strategy.encoding());
        let factors = Factorization::new(&matrix, &config)?;
        debug!(
            "factored {} operator: N = {}, matrix storage = {}, factor storage = {}",
            strategy.as_str(),
            n,
            matrix.storage_len(),
            factors.storage_len()
        );
        Ok(LaplaceOperator {
            grid,
            matrix,
            factors,
            config,
        })
    }

    /// Solves for the given boundary data using the stored factors.
    pub fn solve<F>(&self, boundary: F) -> Result<LaplaceField>
    where
        F: Fn(f64, f64) -> f64,
    {
        let rhs = assemble_rhs(&self.grid, boundary);
        let x = self.factors.solve(&rhs)?;
        self.config
            .check_residual(residual_norm(&self.matrix, &x, &rhs), &rhs)?;
        LaplaceField::from_vector(self.grid, &x)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn strategy(&self) -> Strategy {
        self.factors.strategy()
    }

    pub fn matrix(&self) -> &SystemMatrix {
        &self.matrix
    }

    /// Scalars held by the system matrix.
    pub fn matrix_storage(&self) -> usize {
        self.matrix.storage_len()
    }

    /// Scalars held by the factors.
    pub fn factor_storage(&self) -> usize {
        self.factors.storage_len()
    }
}
