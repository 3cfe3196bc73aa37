// src/assembly/stencil.rs

use crate::grid::{Grid, GridPoint, PointKind};

/// Coefficient of the centre node in an interior row.
pub const CENTER: f64 = -4.0;
/// Coefficient of each of the four axis neighbours in an interior row.
pub const NEIGHBOR: f64 = 1.0;
/// Coefficient of the single entry in a boundary row.
pub const PINNED: f64 = 1.0;

/// Nonzero entries of one row of the system matrix, sorted by column.
#[derive(Debug, Clone, Copy)]
pub struct StencilRow {
    entries: [(usize, f64); 5],
    len: usize,
}

impl StencilRow {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries[..self.len]
    }
}

/// Builds row `p.k` of the 5-point Laplace system.
///
/// Interior rows encode `f[k-N] + f[k-1] - 4 f[k] + f[k+1] + f[k+N] = 0`
/// without the 1/h^2 factor, which cancels against the zero right-hand side.
/// Boundary rows pin `f[k]` to the boundary value.
pub fn row(grid: &Grid, p: &GridPoint) -> StencilRow {
    let k = p.k;
    match p.kind {
        PointKind::Interior => {
            let n = grid.n();
            StencilRow {
                entries: [
                    (k - n, NEIGHBOR),
                    (k - 1, NEIGHBOR),
                    (k, CENTER),
                    (k + 1, NEIGHBOR),
                    (k + n, NEIGHBOR),
                ],
                len: 5,
            }
        }
        PointKind::Boundary => StencilRow {
            entries: [(k, PINNED); 5],
            len: 1,
        },
    }
}

/// Number of nonzeros of the full system: 5 per interior row, 1 per boundary row.
pub fn nnz(grid: &Grid) -> usize {
    5 * grid.n_interior() + grid.n_boundary()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_row() {
        let grid = Grid::new(4, 1.0).unwrap();
        let p = grid.point(grid.index(1, 2));
        assert_eq!(p.k, 6);
        let r = row(&grid, &p);
        assert_eq!(
            r.entries(),
            &[(2, 1.0), (5, 1.0), (6, -4.0), (7, 1.0), (10, 1.0)]
        );
    }

    #[test]
    fn test_boundary_row() {
        let grid = Grid::new(4, 1.0).unwrap();
        let p = grid.point(grid.index(3, 1));
        let r = row(&grid, &p);
        assert_eq!(r.entries(), &[(13, 1.0)]);
    }

    #[test]
    fn test_nnz_formula() {
        for n in 2..12 {
            let grid = Grid::new(n, 1.0).unwrap();
            let counted: usize = grid.points().map(|p| row(&grid, &p).entries().len()).sum();
            assert_eq!(counted, nnz(&grid));
            let m = n - 2;
            assert_eq!(counted, 4 * m * m + n * n);
        }
    }
}
