// src/utils/mod.rs

pub mod linear_algebra;

// Re-export specific functions for easier access
pub use linear_algebra::{
    csr_bandwidths,
    csr_max_abs,
    csr_mul_vec,
    csr_residual_norm,
    csr_to_dense,
    dense_residual_norm,
};
