// src/grid/mod.rs

pub mod codec;
pub mod grid2d;

pub use codec::{to_field, to_vector};
pub use grid2d::{Grid, GridPoint, PointKind};
