// src/utils/linear_algebra.rs

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::csr::CsrMatrix;

/// Expands a compressed-row matrix into a dense matrix.
///
/// # Arguments
///
/// * `matrix` - Sparse matrix in CSR form.
///
/// # Returns
///
/// * A dense matrix with the same shape and entries.
pub fn csr_to_dense(matrix: &CsrMatrix<f64>) -> DMatrix<f64> {
    let mut dense = DMatrix::zeros(matrix.nrows(), matrix.ncols());
    for (i, j, v) in matrix.triplet_iter() {
        dense[(i, j)] += *v;
    }
    dense
}

/// Computes `A x` for a compressed-row matrix without densifying it.
///
/// # Arguments
///
/// * `matrix` - Sparse matrix in CSR form.
/// * `x` - Vector of length `matrix.ncols()`.
pub fn csr_mul_vec(matrix: &CsrMatrix<f64>, x: &DVector<f64>) -> DVector<f64> {
    assert_eq!(matrix.ncols(), x.len(), "matrix columns and vector length must agree");
    let mut y = DVector::zeros(matrix.nrows());
    for (i, row) in matrix.row_iter().enumerate() {
        y[i] = row
            .col_indices()
            .iter()
            .zip(row.values())
            .map(|(j, v)| v * x[*j])
            .sum();
    }
    y
}

/// Euclidean norm of `A x - b` for a dense matrix.
pub fn dense_residual_norm(matrix: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    (matrix * x - b).norm()
}

/// Euclidean norm of `A x - b` for a compressed-row matrix.
pub fn csr_residual_norm(matrix: &CsrMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    (csr_mul_vec(matrix, x) - b).norm()
}

/// Largest absolute entry of a compressed-row matrix (0 for an empty matrix).
pub fn csr_max_abs(matrix: &CsrMatrix<f64>) -> f64 {
    matrix.values().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Lower and upper bandwidth `(kl, ku)` of a compressed-row matrix: the
/// largest distance of a stored entry below and above the diagonal.
pub fn csr_bandwidths(matrix: &CsrMatrix<f64>) -> (usize, usize) {
    let mut kl = 0;
    let mut ku = 0;
    for (i, row) in matrix.row_iter().enumerate() {
        for &j in row.col_indices() {
            if j < i {
                kl = kl.max(i - j);
            } else {
                ku = ku.max(j - i);
            }
        }
    }
    (kl, ku)
}
