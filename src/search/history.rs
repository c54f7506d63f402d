//! The history heuristic: a table of how often each move has been chosen or
//! caused a cutoff, used purely to order moves before searching them. It is
//! never invalidated and lives for the whole process, exactly like the
//! transposition table.

use crate::board::chess_move::Move;
use crate::board::types::Side;
use crate::search::zobrist::move_hash;
use std::collections::HashMap;

#[derive(Default)]
pub struct HistoryTable {
    counts: HashMap<u64, u32>,
}

impl HistoryTable {
    pub fn new() -> Self {
        HistoryTable {
            counts: HashMap::new(),
        }
    }

    fn key(mv: &Move, side: Side) -> u64 {
        move_hash(mv.parent_hash, mv.to, mv.moved_kind, side)
    }

    /// Records that `mv` was chosen (picked at a node, or caused a cutoff).
    pub fn record(&mut self, mv: &Move, side: Side) {
        *self.counts.entry(Self::key(mv, side)).or_insert(0) += 1;
    }

    fn count(&self, mv: &Move, side: Side) -> u32 {
        self.counts.get(&Self::key(mv, side)).copied().unwrap_or(0)
    }

    /// Sorts `moves` by descending history count, stable on ties so
    /// generation order (and therefore determinism) is preserved between
    /// equally-ranked moves.
    pub fn order(&self, moves: &mut [Move], side: Side) {
        moves.sort_by_key(|mv| std::cmp::Reverse(self.count(mv, side)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board::Board;
    use crate::board::movegen::legal_moves;
    use crate::board::types::Square;

    #[test]
    fn repeatedly_recorded_move_sorts_first() {
        let board = Board::starting_position();
        let mut moves = legal_moves(&board, Side::White);
        let mut table = HistoryTable::new();
        let target = moves
            .iter()
            .find(|m| m.to == Square::from_algebraic("e4").unwrap())
            .cloned()
            .unwrap();
        for _ in 0..5 {
            table.record(&target, Side::White);
        }
        table.order(&mut moves, Side::White);
        assert_eq!(moves[0].to, target.to);
        assert_eq!(moves[0].from, target.from);
    }

    #[test]
    fn unrecorded_moves_keep_generation_order() {
        let board = Board::starting_position();
        let moves = legal_moves(&board, Side::White);
        let mut ordered = moves.clone();
        let table = HistoryTable::new();
        table.order(&mut ordered, Side::White);
        assert_eq!(moves, ordered);
    }
}
