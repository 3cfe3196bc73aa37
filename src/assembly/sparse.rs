// src/assembly/sparse.rs

use nalgebra_sparse::coo::CooMatrix;
use nalgebra_sparse::csr::CsrMatrix;

use crate::assembly::stencil;
use crate::grid::Grid;

/// Builds the system matrix in compressed-row form.
///
/// Only the stencil nonzeros are stored, so storage is proportional to N^2.
pub fn build_sparse_operator(grid: &Grid) -> CsrMatrix<f64> {
    let order = grid.n_points();
    let mut coo = CooMatrix::new(order, order);

    for p in grid.points() {
        for &(col, value) in stencil::row(grid, &p).entries() {
            coo.push(p.k, col, value);
        }
    }

    CsrMatrix::from(&coo)
}
