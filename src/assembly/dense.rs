// src/assembly/dense.rs

use nalgebra::DMatrix;

use crate::assembly::stencil;
use crate::grid::Grid;

/// Builds the dense N^2 x N^2 system matrix.
///
/// Allocates all N^4 entries; only the stencil positions are written.
pub fn build_dense_operator(grid: &Grid) -> DMatrix<f64> {
    let order = grid.n_points();
    let mut matrix = DMatrix::zeros(order, order);

    for p in grid.points() {
        for &(col, value) in stencil::row(grid, &p).entries() {
            matrix[(p.k, col)] = value;
        }
    }

    matrix
}
