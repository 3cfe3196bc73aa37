// src/grid/grid2d.rs

use crate::error::{LaplaceError, Result};

/// Classification of a grid node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Interior,
    Boundary,
}

/// One node of the grid together with its flat index and coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub i: usize,
    pub j: usize,
    pub k: usize,   // flat index i*N + j
    pub x: f64,     // [-L/2, L/2]
    pub y: f64,     // [-L/2, L/2]
    pub kind: PointKind,
}

/// Uniform N x N grid over the square [-L/2, L/2]^2.
///
/// Both axes share the same spacing `h = L / (N - 1)`, which the 5-point
/// stencil requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    n: usize,
    length: f64,
    spacing: f64,
}

impl Grid {
    /// Creates a grid with `n` nodes per axis over a domain of side `length`.
    ///
    /// # Errors
    ///
    /// * `InvalidGrid` if `n < 2`.
    /// * `InvalidDomain` if `length` is not a positive finite number.
    pub fn new(n: usize, length: f64) -> Result<Self> {
        if n < 2 {
            return Err(LaplaceError::InvalidGrid { n });
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(LaplaceError::InvalidDomain { length });
        }
        Ok(Grid {
            n,
            length,
            spacing: length / (n - 1) as f64,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of unknowns, N^2.
    pub fn n_points(&self) -> usize {
        self.n * self.n
    }

    /// x-coordinate of column index `i`.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        -0.5 * self.length + i as f64 * self.spacing
    }

    /// y-coordinate of row index `j`.
    #[inline]
    pub fn y(&self, j: usize) -> f64 {
        -0.5 * self.length + j as f64 * self.spacing
    }

    /// Flat index of node (i, j).
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n);
        i * self.n + j
    }

    /// Inverse of [`Grid::index`].
    #[inline]
    pub fn coords(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.n_points());
        (k / self.n, k % self.n)
    }

    pub fn kind(&self, i: usize, j: usize) -> PointKind {
        let last = self.n - 1;
        if i > 0 && i < last && j > 0 && j < last {
            PointKind::Interior
        } else {
            PointKind::Boundary
        }
    }

    pub fn point(&self, k: usize) -> GridPoint {
        let (i, j) = self.coords(k);
        GridPoint {
            i,
            j,
            k,
            x: self.x(i),
            y: self.y(j),
            kind: self.kind(i, j),
        }
    }

    /// All nodes in flat-index order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..self.n_points()).map(move |k| self.point(k))
    }

    pub fn n_interior(&self) -> usize {
        let m = self.n.saturating_sub(2);
        m * m
    }

    pub fn n_boundary(&self) -> usize {
        self.n_points() - self.n_interior()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rejects_bad_parameters() {
        assert!(matches!(Grid::new(1, 1.0), Err(LaplaceError::InvalidGrid { n: 1 })));
        assert!(matches!(Grid::new(0, 1.0), Err(LaplaceError::InvalidGrid { n: 0 })));
        assert!(matches!(Grid::new(4, 0.0), Err(LaplaceError::InvalidDomain { .. })));
        assert!(matches!(Grid::new(4, -2.0), Err(LaplaceError::InvalidDomain { .. })));
        assert!(matches!(Grid::new(4, f64::NAN), Err(LaplaceError::InvalidDomain { .. })));
        assert!(Grid::new(2, 1.0).is_ok());
    }

    #[test]
    fn test_coordinates_span_domain() {
        let grid = Grid::new(5, 2.0).unwrap();
        assert_eq!(grid.spacing(), 0.5);
        assert_eq!(grid.x(0), -1.0);
        assert_eq!(grid.x(4), 1.0);
        assert_eq!(grid.y(2), 0.0);
    }

    #[test]
    fn test_index_mapping_is_bijective() {
        let grid = Grid::new(4, 1.0).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 3), 3);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(3, 2), 14);
        for k in 0..grid.n_points() {
            let (i, j) = grid.coords(k);
            assert_eq!(grid.index(i, j), k);
        }
    }

    #[test]
    fn test_classification() {
        let grid = Grid::new(4, 1.0).unwrap();
        assert_eq!(grid.kind(0, 1), PointKind::Boundary);
        assert_eq!(grid.kind(3, 3), PointKind::Boundary);
        assert_eq!(grid.kind(1, 2), PointKind::Interior);

        let interior = grid.points().filter(|p| p.kind == PointKind::Interior).count();
        assert_eq!(interior, grid.n_interior());
        assert_eq!(interior, 4);
        assert_eq!(grid.n_boundary(), 12);

        // N = 2 has no interior nodes
        let tiny = Grid::new(2, 1.0).unwrap();
        assert!(tiny.points().all(|p| p.kind == PointKind::Boundary));
    }
}
