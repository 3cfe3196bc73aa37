// src/assembly/mod.rs

//! Encoding of the Dirichlet Laplace problem as a linear system `A x = b`.

pub mod dense;
pub mod sparse;
pub mod stencil;

use log::debug;
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::csr::CsrMatrix;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{Grid, PointKind};
use crate::utils::csr_to_dense;

pub use dense::build_dense_operator;
pub use sparse::build_sparse_operator;

/// Storage layout of the system matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Dense,
    Sparse,
}

/// The system matrix in one of the two encodings.
#[derive(Debug, Clone)]
pub enum SystemMatrix {
    Dense(DMatrix<f64>),
    Sparse(CsrMatrix<f64>),
}

impl SystemMatrix {
    pub fn encoding(&self) -> Encoding {
        match self {
            SystemMatrix::Dense(_) => Encoding::Dense,
            SystemMatrix::Sparse(_) => Encoding::Sparse,
        }
    }

    /// Matrix order (number of rows).
    pub fn order(&self) -> usize {
        match self {
            SystemMatrix::Dense(m) => m.nrows(),
            SystemMatrix::Sparse(m) => m.nrows(),
        }
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        match self {
            SystemMatrix::Dense(m) => m.iter().filter(|v| **v != 0.0).count(),
            SystemMatrix::Sparse(m) => m.nnz(),
        }
    }

    /// Number of scalars held by the encoding.
    pub fn storage_len(&self) -> usize {
        match self {
            SystemMatrix::Dense(m) => m.len(),
            SystemMatrix::Sparse(m) => m.values().len(),
        }
    }

    /// Materializes the matrix densely. Intended for inspection and tests.
    pub fn to_dense(&self) -> DMatrix<f64> {
        match self {
            SystemMatrix::Dense(m) => m.clone(),
            SystemMatrix::Sparse(m) => csr_to_dense(m),
        }
    }
}

/// An assembled system `A x = b` together with the grid that produced it.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub grid: Grid,
    pub matrix: SystemMatrix,
    pub rhs: DVector<f64>,
}

/// Builds the system matrix for `grid`. The matrix does not depend on the
/// boundary data.
pub fn assemble_operator(grid: &Grid, encoding: Encoding) -> SystemMatrix {
    let matrix = match encoding {
        Encoding::Dense => SystemMatrix::Dense(build_dense_operator(grid)),
        Encoding::Sparse => SystemMatrix::Sparse(build_sparse_operator(grid)),
    };
    debug!(
        "assembled {:?} operator: N = {}, order = {}, storage = {}",
        encoding,
        grid.n(),
        matrix.order(),
        matrix.storage_len()
    );
    matrix
}

/// Builds the right-hand side: zero on interior rows, `boundary(x, y)` on
/// boundary rows.
pub fn assemble_rhs<F>(grid: &Grid, boundary: F) -> DVector<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut rhs = DVector::zeros(grid.n_points());
    for p in grid.points() {
        if p.kind == PointKind::Boundary {
            rhs[p.k] = boundary(p.x, p.y);
        }
    }
    rhs
}

/// Assembles the Laplace system on an `n` x `n` grid over `[-L/2, L/2]^2`.
///
/// # Errors
///
/// * `InvalidGrid` if `n < 2`.
/// * `InvalidDomain` if `length <= 0`.
pub fn assemble<F>(n: usize, length: f64, boundary: F, encoding: Encoding) -> Result<LinearSystem>
where
    F: Fn(f64, f64) -> f64,
{
    let grid = Grid::new(n, length)?;
    let matrix = assemble_operator(&grid, encoding);
    let rhs = assemble_rhs(&grid, boundary);
    Ok(LinearSystem { grid, matrix, rhs })
}

/// Dense form of [`assemble`], returning `(A, b)`.
pub fn assemble_dense<F>(n: usize, length: f64, boundary: F) -> Result<(DMatrix<f64>, DVector<f64>)>
where
    F: Fn(f64, f64) -> f64,
{
    let grid = Grid::new(n, length)?;
    Ok((build_dense_operator(&grid), assemble_rhs(&grid, boundary)))
}

/// Sparse form of [`assemble`], returning `(A, b)`.
pub fn assemble_sparse<F>(n: usize, length: f64, boundary: F) -> Result<(CsrMatrix<f64>, DVector<f64>)>
where
    F: Fn(f64, f64) -> f64,
{
    let grid = Grid::new(n, length)?;
    Ok((build_sparse_operator(&grid), assemble_rhs(&grid, boundary)))
}
