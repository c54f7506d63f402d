pub mod evaluator;

pub use evaluator::{heuristic, piece_value};
