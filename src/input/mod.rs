// src/input/mod.rs

pub mod input_deck;
pub mod parser;

pub use input_deck::{GridSettings, InputDeck, OutputSettings, SolverSettings};
pub use parser::parse_input_deck;
