// src/bin/laplace_scaling.rs
//
// Time the dense and sparse Laplace solvers across grid sizes and report
// how matrix storage, factor storage and solve time grow with N.
//
// Usage:
//   cargo run --release --bin laplace_scaling
//   cargo run --release --bin laplace_scaling -- decks/scaling.yaml
//
// Set RUST_LOG=info (or debug) for progress output.

use laplaceFD::benchmark::{growth_exponent, run_scaling, write_records, Metric};
use laplaceFD::input::{parse_input_deck, InputDeck};
use laplaceFD::Strategy;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let deck = match std::env::args().nth(1) {
        Some(path) => parse_input_deck(&path)?,
        None => InputDeck::default(),
    };

    let records = run_scaling(&deck)?;

    println!(
        "{:>5} {:>7} {:>9} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "N", "solver", "unknowns", "matrix", "factor", "assemble[s]", "solve[s]", "residual"
    );
    for r in &records {
        println!(
            "{:>5} {:>7} {:>9} {:>12} {:>12} {:>12.3e} {:>12.3e} {:>10.2e}",
            r.n,
            r.strategy.as_str(),
            r.unknowns,
            r.matrix_storage,
            r.factor_storage,
            r.assemble_seconds,
            r.solve_seconds,
            r.residual
        );
    }

    println!();
    println!("growth exponents in N (log-log fit):");
    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let fit = |metric| {
            growth_exponent(&records, strategy, metric)
                .map(|e| format!("{:.2}", e))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "  {:>6}: matrix {}, factor {}, solve time {}",
            strategy.as_str(),
            fit(Metric::MatrixStorage),
            fit(Metric::FactorStorage),
            fit(Metric::SolveTime)
        );
    }

    if let Some(output) = &deck.output {
        let path = write_records(&records, &output.output_folder)?;
        println!("\nrecords written to {}", path.display());
    }

    Ok(())
}
