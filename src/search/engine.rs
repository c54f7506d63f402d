//! Iterative-deepening alpha-beta search with a quiescence extension,
//! history-table move ordering, and a transposition table over leaf
//! heuristic evaluations.
//!
//! This follows the direct min/max formulation (not negamax): `min_value`
//! and `max_value` each keep their own sign convention and alpha/beta never
//! get negated crossing the recursion boundary.

use crate::board::attacks::is_non_quiescent;
use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::movegen::legal_moves;
use crate::board::types::Side;
use crate::config;
use crate::eval;
use crate::rng::Prng;
use crate::search::history::HistoryTable;
use crate::search::transposition_table::TranspositionTable;
use crate::search::zobrist;
use std::time::{Duration, Instant};

#[derive(Default, Debug, Clone)]
pub struct SearchMetrics {
    pub nodes_explored: u64,
    pub alpha_cutoffs: u64,
    pub beta_cutoffs: u64,
    pub max_depth_reached: i32,
    pub elapsed: Duration,
    pub tt_hits: u64,
    pub tt_misses: u64,
}

impl SearchMetrics {
    pub fn print(&self) {
        println!("search time:      {:.3}s", self.elapsed.as_secs_f64());
        println!("nodes explored:   {}", self.nodes_explored);
        if self.elapsed.as_secs_f64() > 0.0 {
            println!(
                "nodes/sec:        {:.0}",
                self.nodes_explored as f64 / self.elapsed.as_secs_f64()
            );
        }
        println!("max depth:        {}", self.max_depth_reached);
        println!(
            "cutoffs:          alpha={} beta={}",
            self.alpha_cutoffs, self.beta_cutoffs
        );
        let total = self.tt_hits + self.tt_misses;
        if total > 0 {
            println!(
                "tt hit rate:      {:.1}% ({} hits / {} probes)",
                100.0 * self.tt_hits as f64 / total as f64,
                self.tt_hits,
                total
            );
        }
    }
}

pub struct SearchEngine {
    transposition_table: TranspositionTable,
    history: HistoryTable,
    rng: Prng,
    last_metrics: Option<SearchMetrics>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        SearchEngine {
            transposition_table: TranspositionTable::new(),
            history: HistoryTable::new(),
            rng: Prng::default(),
            last_metrics: None,
        }
    }

    /// Clears the transposition table for a fresh game. The history table
    /// is intentionally left untouched — it is process-global for the
    /// engine's whole lifetime, per the move-ordering design.
    pub fn new_game(&mut self) {
        self.transposition_table.clear();
    }

    pub fn last_metrics(&self) -> Option<&SearchMetrics> {
        self.last_metrics.as_ref()
    }

    pub fn transposition_table_len(&self) -> usize {
        self.transposition_table.len()
    }

    /// Iterative deepening: runs `search_root` at depth 1, 2, 3, ... and
    /// keeps the last fully-completed depth's result. The time budget is
    /// only checked after a depth finishes, so a single depth can overshoot
    /// `time_budget` — this is an accepted gap, not a bug.
    pub fn find_best_move(&mut self, board: &Board, time_budget: Duration) -> Option<Move> {
        let root_side = board.active_side;
        if legal_moves(board, root_side).is_empty() {
            return None;
        }
        let start = Instant::now();
        let mut metrics = SearchMetrics::default();
        let mut best = None;
        let mut depth = 1;
        loop {
            metrics.max_depth_reached = depth;
            best = Some(self.search_root(board, depth, config::QUIESCENCE_LIMIT, &mut metrics));
            depth += 1;
            if start.elapsed().as_secs_f64() >= config::MAX_COMPUTATION_TIME_SECS {
                break;
            }
        }
        metrics.elapsed = start.elapsed();
        metrics.tt_hits = self.transposition_table.hits();
        metrics.tt_misses = self.transposition_table.misses();
        self.last_metrics = Some(metrics);
        best
    }

    fn search_root(
        &mut self,
        board: &Board,
        depth: i32,
        quiescence: i32,
        metrics: &mut SearchMetrics,
    ) -> Move {
        let side = board.active_side;
        let mut actions = legal_moves(board, side);
        assert!(
            !actions.is_empty(),
            "search_root invoked with no legal moves available"
        );
        self.history.order(&mut actions, side);

        let mut alpha = i32::MIN + 1;
        let beta = i32::MAX - 1;
        let mut best_score = i32::MIN;
        let mut best_move = actions[0];

        for mv in &actions {
            metrics.nodes_explored += 1;
            let child = board.apply(mv);
            let score = self.min_value(&child, side, depth - 1, quiescence, alpha, beta, metrics);
            if score > alpha {
                alpha = score;
            }
            if score > best_score || (score == best_score && self.rng.coin_flip()) {
                best_score = score;
                best_move = *mv;
            }
        }

        self.history.record(&best_move, side);
        best_move
    }

    #[allow(clippy::too_many_arguments)]
    fn min_value(
        &mut self,
        state: &Board,
        max_side: Side,
        depth: i32,
        quiescence: i32,
        alpha: i32,
        mut beta: i32,
        metrics: &mut SearchMetrics,
    ) -> i32 {
        debug_assert_ne!(state.active_side, max_side);
        metrics.nodes_explored += 1;

        let extend_quiescence = depth <= 0 && quiescence > 0 && is_non_quiescent(state);
        if depth <= 0 && !extend_quiescence {
            return self.tt_heuristic(state, max_side);
        }

        let side = state.active_side;
        let mut actions = legal_moves(state, side);
        if actions.is_empty() {
            return config::CHECKMATE_VALUE_BASE + depth + quiescence;
        }
        self.history.order(&mut actions, side);

        let mut best_score = i32::MAX;
        let mut best_move = actions[0];

        for mv in &actions {
            let child = state.apply(mv);
            let score = if extend_quiescence {
                self.max_value(&child, max_side, depth, quiescence - 1, alpha, beta, metrics)
            } else {
                self.max_value(&child, max_side, depth - 1, quiescence, alpha, beta, metrics)
            };
            if score <= alpha {
                metrics.alpha_cutoffs += 1;
                self.history.record(mv, side);
                return score;
            }
            if score < beta {
                beta = score;
            }
            if score < best_score || (score == best_score && self.rng.coin_flip()) {
                best_score = score;
                best_move = *mv;
            }
        }

        self.history.record(&best_move, side);
        best_score
    }

    #[allow(clippy::too_many_arguments)]
    fn max_value(
        &mut self,
        state: &Board,
        max_side: Side,
        depth: i32,
        quiescence: i32,
        mut alpha: i32,
        beta: i32,
        metrics: &mut SearchMetrics,
    ) -> i32 {
        debug_assert_eq!(state.active_side, max_side);
        metrics.nodes_explored += 1;

        let extend_quiescence = depth <= 0 && quiescence > 0 && is_non_quiescent(state);
        if depth <= 0 && !extend_quiescence {
            return self.tt_heuristic(state, max_side);
        }

        let side = state.active_side;
        let mut actions = legal_moves(state, side);
        if actions.is_empty() {
            return -(i32::MAX - 1);
        }
        self.history.order(&mut actions, side);

        let mut best_score = i32::MIN;
        let mut best_move = actions[0];

        for mv in &actions {
            let child = state.apply(mv);
            let score = if extend_quiescence {
                self.min_value(&child, max_side, depth, quiescence - 1, alpha, beta, metrics)
            } else {
                self.min_value(&child, max_side, depth - 1, quiescence, alpha, beta, metrics)
            };
            if score >= beta {
                metrics.beta_cutoffs += 1;
                self.history.record(mv, side);
                return score;
            }
            if score > alpha {
                alpha = score;
            }
            if score > best_score || (score == best_score && self.rng.coin_flip()) {
                best_score = score;
                best_move = *mv;
            }
        }

        self.history.record(&best_move, side);
        best_score
    }

    fn tt_heuristic(&mut self, state: &Board, perspective: Side) -> i32 {
        let hash = zobrist::compute_hash(state);
        if let Some(value) = self.transposition_table.get(hash) {
            return value;
        }
        let value = eval::heuristic(state, perspective);
        self.transposition_table.insert(hash, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{PieceKind, Square};

    #[test]
    fn finds_mate_in_one() {
        // Black king h8, white king h6 (supporting g7), white queen a7:
        // Qa7-g7 delivers mate, the queen defended by the king on the only
        // square it could be captured from.
        let mut board = Board::empty();
        board.place(Square::new(7, 7), PieceKind::King, Side::Black);
        board.place(Square::new(5, 7), PieceKind::King, Side::White);
        board.place(Square::new(6, 0), PieceKind::Queen, Side::White);
        board.active_side = Side::White;

        let mut engine = SearchEngine::new();
        let mv = engine
            .find_best_move(&board, Duration::from_millis(200))
            .expect("white has legal moves");
        let after = board.apply(&mv);
        assert!(legal_moves(&after, Side::Black).is_empty());
        assert!(crate::board::attacks::in_check(&after, Side::Black));
    }

    #[test]
    fn prefers_capturing_a_hanging_queen() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(7, 4), PieceKind::King, Side::Black);
        board.place(Square::new(3, 3), PieceKind::Rook, Side::White);
        board.place(Square::new(3, 6), PieceKind::Queen, Side::Black);
        board.active_side = Side::White;

        let mut engine = SearchEngine::new();
        let mv = engine
            .find_best_move(&board, Duration::from_millis(200))
            .unwrap();
        assert_eq!(mv.to, Square::new(3, 6));
    }
}
