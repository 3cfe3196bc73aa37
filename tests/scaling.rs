// tests/scaling.rs
//
// Storage growth of the two encodings and the scaling harness output.
// Run with: cargo test --test scaling

use approx::assert_abs_diff_eq;
use tempfile::tempdir;

use laplaceFD::assembly::{assemble_operator, stencil, Encoding};
use laplaceFD::benchmark::{growth_exponent, run_scaling, write_records, Metric, ScalingRecord};
use laplaceFD::input::InputDeck;
use laplaceFD::solver::Factorization;
use laplaceFD::{BoundaryProfile, Grid, SolverConfig, Strategy};

#[test]
fn matrix_storage_grows_as_n4_dense_and_n2_sparse() {
    let sizes = [10usize, 20, 40];
    let mut dense = Vec::new();
    let mut sparse = Vec::new();
    for &n in &sizes {
        let grid = Grid::new(n, 1.0).unwrap();
        let d = assemble_operator(&grid, Encoding::Dense).storage_len();
        let s = assemble_operator(&grid, Encoding::Sparse).storage_len();
        assert_eq!(d, n.pow(4));
        assert_eq!(s, stencil::nnz(&grid));
        assert!(s <= 5 * n * n);
        dense.push(d as f64);
        sparse.push(s as f64);
    }

    for k in 1..sizes.len() {
        // doubling N multiplies dense storage by 16 and sparse storage by ~4
        assert_abs_diff_eq!(dense[k] / dense[k - 1], 16.0, epsilon = 1e-12);
        let ratio = sparse[k] / sparse[k - 1];
        assert!(ratio > 3.5 && ratio < 5.0, "sparse ratio {}", ratio);
    }
}

#[test]
fn banded_factor_is_smaller_than_dense_factor() {
    let config = SolverConfig::default();
    for &n in &[10usize, 20] {
        let grid = Grid::new(n, 1.0).unwrap();
        let banded = Factorization::new(&assemble_operator(&grid, Encoding::Sparse), &config).unwrap();
        assert_eq!(banded.storage_len(), n * n * (3 * n + 1));
        assert!(banded.storage_len() < n.pow(4));
    }
}

#[test]
fn scaling_harness_fits_storage_exponents() {
    let mut deck = InputDeck::default();
    deck.grid.sizes = vec![6, 12, 24];
    deck.grid.domain_length = 2.0;
    deck.boundary = BoundaryProfile::Saddle { scale: 1.0 };
    deck.solver.max_dense_n = 12;

    let records = run_scaling(&deck).unwrap();
    assert_eq!(records.iter().filter(|r| r.strategy == Strategy::Dense).count(), 2);
    assert_eq!(records.iter().filter(|r| r.strategy == Strategy::Sparse).count(), 3);
    assert!(records.iter().all(|r| r.residual < 1e-8));

    let dense = growth_exponent(&records, Strategy::Dense, Metric::MatrixStorage).unwrap();
    let sparse = growth_exponent(&records, Strategy::Sparse, Metric::MatrixStorage).unwrap();
    assert_abs_diff_eq!(dense, 4.0, epsilon = 1e-9);
    assert!(sparse > 1.9 && sparse < 2.6, "sparse exponent {}", sparse);

    let factor = growth_exponent(&records, Strategy::Sparse, Metric::FactorStorage).unwrap();
    assert!(factor > 2.9 && factor < 3.2, "factor exponent {}", factor);
}

#[test]
fn records_are_written_as_yaml() {
    let mut deck = InputDeck::default();
    deck.grid.sizes = vec![4, 5];
    let records = run_scaling(&deck).unwrap();

    let dir = tempdir().unwrap();
    let path = write_records(&records, dir.path().join("out")).unwrap();
    assert!(path.ends_with("scaling.yaml"));

    let text = std::fs::read_to_string(&path).unwrap();
    let back: Vec<ScalingRecord> = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back.len(), records.len());
    assert_eq!(back[0].n, 4);
    assert_eq!(back[0].strategy, records[0].strategy);
}
