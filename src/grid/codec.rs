// src/grid/codec.rs

use nalgebra::{DMatrix, DVector};

use crate::error::{LaplaceError, Result};

/// Reshapes a flat solution vector into an N x N field with
/// `field[(i, j)] = x[i * N + j]`.
///
/// # Errors
///
/// * `ShapeMismatch` if `x.len() != n * n`.
pub fn to_field(x: &DVector<f64>, n: usize) -> Result<DMatrix<f64>> {
    if x.len() != n * n {
        return Err(LaplaceError::shape("solution vector", n * n, x.len()));
    }
    Ok(DMatrix::from_row_slice(n, n, x.as_slice()))
}

/// Flattens an N x N field back into a solution vector. Inverse of [`to_field`].
///
/// # Errors
///
/// * `ShapeMismatch` if `field` is not N x N.
pub fn to_vector(field: &DMatrix<f64>, n: usize) -> Result<DVector<f64>> {
    if field.nrows() != n {
        return Err(LaplaceError::shape("field rows", n, field.nrows()));
    }
    if field.ncols() != n {
        return Err(LaplaceError::shape("field columns", n, field.ncols()));
    }
    // DMatrix is column-major, so the transpose's storage is the row-major order.
    Ok(DVector::from_column_slice(field.transpose().as_slice()))
}
