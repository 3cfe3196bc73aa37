// src/error.rs

use thiserror::Error;

/// Errors raised while building or solving a grid system.
#[derive(Error, Debug)]
pub enum LaplaceError {
    #[error("Invalid grid: N must be at least 2, got {n}")]
    InvalidGrid { n: usize },

    #[error("Invalid domain: L must be positive and finite, got {length}")]
    InvalidDomain { length: f64 },

    #[error("Singular system: {detail}")]
    SingularSystem { detail: String },

    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LaplaceError>;

impl LaplaceError {
    pub(crate) fn singular(detail: impl Into<String>) -> Self {
        LaplaceError::SingularSystem {
            detail: detail.into(),
        }
    }

    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        LaplaceError::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}
