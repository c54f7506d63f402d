pub mod engine;
pub mod history;
pub mod transposition_table;
pub mod zobrist;

pub use engine::{SearchEngine, SearchMetrics};
pub use history::HistoryTable;
pub use transposition_table::TranspositionTable;
