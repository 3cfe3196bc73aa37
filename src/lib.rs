// src/lib.rs

//! Finite-difference solver for the 2D Laplace equation with Dirichlet
//! boundary data, with dense and sparse encodings of the 5-point system.

pub mod assembly;
pub mod benchmark;
pub mod boundary;
pub mod error;
pub mod grid;
pub mod input;
pub mod laplace;
pub mod solver;
pub mod utils;

pub use boundary::BoundaryProfile;
pub use error::{LaplaceError, Result};
pub use grid::{to_field, to_vector, Grid, PointKind};
pub use laplace::{dense_solve, solve_with, sparse_solve, LaplaceField, LaplaceOperator};
pub use solver::{SolverConfig, Strategy};
