// src/benchmark/mod.rs

pub mod scaling;

pub use scaling::{growth_exponent, measure, run_scaling, write_records, Metric, ScalingRecord};
