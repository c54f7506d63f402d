//! Process-wide Zobrist hashing. Deliberately material-only: it XORs a key
//! per occupied square and does not mix in castling rights, en-passant
//! target, or side to move, unlike a general-purpose transposition-table
//! key. That keeps the hash cheap and matches what the transposition table
//! here actually caches: a heuristic value for a material configuration.

use crate::board::board::Board;
use crate::board::types::{PieceKind, Side, Square};
use crate::config::PRNG_SEED;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::OnceLock;

const KIND_COUNT: usize = 6;
const SIDE_COUNT: usize = 2;

struct ZobristTable {
    keys: [[[u64; KIND_COUNT * SIDE_COUNT]; 8]; 8],
}

static TABLE: OnceLock<ZobristTable> = OnceLock::new();

fn table() -> &'static ZobristTable {
    TABLE.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(PRNG_SEED);
        let mut keys = [[[0u64; KIND_COUNT * SIDE_COUNT]; 8]; 8];
        for rank in keys.iter_mut() {
            for file in rank.iter_mut() {
                for key in file.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }
        ZobristTable { keys }
    })
}

fn key_slot(kind: PieceKind, side: Side) -> usize {
    kind.index() * SIDE_COUNT + side.index()
}

fn square_key(square: Square, kind: PieceKind, side: Side) -> u64 {
    let (rank, file) = square.index();
    table().keys[rank][file][key_slot(kind, side)]
}

/// Hashes a board as the XOR of the keys for every occupied square.
pub fn compute_hash(board: &Board) -> u64 {
    let mut hash = 0u64;
    for side in [Side::White, Side::Black] {
        for &(kind, square) in &board.pieces[side.index()] {
            hash ^= square_key(square, kind, side);
        }
    }
    hash
}

/// `parentHash XOR key(toSquare, movedKind, side)`, the key used for the
/// history table. Two different moves that both land the same kind on the
/// same square from the same parent position collide by construction; the
/// history table does not treat that as a bug, it is a move-ordering hint.
pub fn move_hash(parent_hash: u64, to: Square, moved_kind: PieceKind, side: Side) -> u64 {
    parent_hash ^ square_key(to, moved_kind, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::PieceKind;

    #[test]
    fn starting_position_hash_is_stable_across_calls() {
        let board = Board::starting_position();
        assert_eq!(compute_hash(&board), compute_hash(&board));
    }

    #[test]
    fn different_positions_hash_differently() {
        let mut board = Board::starting_position();
        let h1 = compute_hash(&board);
        board.grid[1][4] = 0;
        board.pieces[Side::White.index()].retain(|&(_, sq)| sq != Square::new(1, 4));
        board.place(Square::new(3, 4), PieceKind::Pawn, Side::White);
        let h2 = compute_hash(&board);
        assert_ne!(h1, h2);
    }

    #[test]
    fn move_hash_depends_on_destination_and_side() {
        let parent = 123u64;
        let a = move_hash(parent, Square::new(3, 4), PieceKind::Pawn, Side::White);
        let b = move_hash(parent, Square::new(3, 4), PieceKind::Pawn, Side::Black);
        assert_ne!(a, b);
    }
}
