//! Tunable constants named once here instead of scattered through the
//! search and evaluator as magic numbers.

/// Seed for every deterministic pseudo-random source in the crate: the
/// Zobrist table and the search's tie-break coin flips. Fixed at zero so
/// two runs over the same position make the same choices.
pub const PRNG_SEED: u64 = 0;

/// Wall-clock budget for one call to iterative deepening. Checked only
/// after a depth fully completes, so a single depth can overshoot this.
pub const MAX_COMPUTATION_TIME_SECS: f64 = 1.0;

/// How many quiescence plies extend the search past the base depth once a
/// position is judged non-quiescent.
pub const QUIESCENCE_LIMIT: i32 = 2;

/// Base magnitude for a detected checkmate, comfortably below `i32::MAX` so
/// `CHECKMATE_VALUE_BASE + remaining_depth` never overflows.
pub const CHECKMATE_VALUE_BASE: i32 = i32::MAX - 50;

pub const WEIGHT_OWN_MATERIAL: i32 = 25;
pub const WEIGHT_OPPONENT_MATERIAL: i32 = -20;
pub const WEIGHT_OWN_GUARDED: i32 = 5;
pub const WEIGHT_OPPONENT_ATTACKABLE: i32 = 3;
pub const WEIGHT_PAWN_ADVANCEMENT: i32 = 2;
