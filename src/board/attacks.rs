//! Direct attack detection: answers "is this square attacked by this side?"
//! without generating any moves, used both for check detection and by the
//! evaluator's guarded/attackable terms.

use super::board::Board;
use super::types::{PieceKind, Side, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if `square` is attacked by any piece belonging to `attacker`.
pub fn space_threatened(board: &Board, square: Square, attacker: Side) -> bool {
    if knight_threatens(board, square, attacker) {
        return true;
    }
    if pawn_threatens(board, square, attacker) {
        return true;
    }
    if slider_threatens(board, square, attacker, DIAGONAL_DIRS, PieceKind::Bishop) {
        return true;
    }
    if slider_threatens(board, square, attacker, ORTHOGONAL_DIRS, PieceKind::Rook) {
        return true;
    }
    false
}

fn knight_threatens(board: &Board, square: Square, attacker: Side) -> bool {
    KNIGHT_OFFSETS.iter().any(|&(dr, df)| {
        let from = square.offset(dr, df);
        matches!(board.piece_at(from), Some((PieceKind::Knight, side)) if side == attacker)
    })
}

/// The squares from which an `attacker` pawn would capture onto `square`.
fn pawn_threatens(board: &Board, square: Square, attacker: Side) -> bool {
    let backward = -attacker.pawn_forward();
    [(backward, -1), (backward, 1)].iter().any(|&(dr, df)| {
        let from = square.offset(dr, df);
        matches!(board.piece_at(from), Some((PieceKind::Pawn, side)) if side == attacker)
    })
}

/// Walks each direction in `dirs` one step at a time; the first occupied
/// square on a ray decides that ray (blocked if it isn't a matching
/// attacker piece) — the king only threatens the adjacent square.
fn slider_threatens(
    board: &Board,
    square: Square,
    attacker: Side,
    dirs: [(i8, i8); 4],
    slider: PieceKind,
) -> bool {
    for (dr, df) in dirs {
        let mut cur = square;
        let mut distance = 0;
        loop {
            cur = cur.offset(dr, df);
            distance += 1;
            if !cur.on_board() {
                break;
            }
            match board.piece_at(cur) {
                None => continue,
                Some((kind, side)) if side == attacker => {
                    if kind == slider || kind == PieceKind::Queen {
                        return true;
                    }
                    if distance == 1 && kind == PieceKind::King {
                        return true;
                    }
                    break;
                }
                Some(_) => break,
            }
        }
    }
    false
}

pub fn in_check(board: &Board, side: Side) -> bool {
    space_threatened(board, board.king_square(side), side.opponent())
}

/// `is_non_quiescent(board)` per the search design: the square the last
/// move landed on is under attack from the side now to move.
pub fn is_non_quiescent(board: &Board) -> bool {
    match board.last_move_to {
        Some(square) => space_threatened(board, square, board.active_side),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::CastlingRights;

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::starting_position();
        assert!(!in_check(&board, Side::White));
        assert!(!in_check(&board, Side::Black));
    }

    #[test]
    fn rook_threatens_along_open_file() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), PieceKind::King, Side::White);
        board.place(Square::new(7, 0), PieceKind::King, Side::Black);
        board.place(Square::new(3, 3), PieceKind::Rook, Side::Black);
        assert!(space_threatened(
            &board,
            Square::new(3, 0),
            Side::Black
        ));
        assert!(!space_threatened(
            &board,
            Square::new(4, 3),
            Side::Black
        ));
    }

    #[test]
    fn blocked_rook_does_not_threaten_past_blocker() {
        let mut board = Board::empty();
        board.castling = [CastlingRights::None, CastlingRights::None];
        board.place(Square::new(0, 0), PieceKind::King, Side::White);
        board.place(Square::new(7, 7), PieceKind::King, Side::Black);
        board.place(Square::new(3, 0), PieceKind::Rook, Side::Black);
        board.place(Square::new(3, 3), PieceKind::Pawn, Side::White);
        assert!(!space_threatened(
            &board,
            Square::new(3, 5),
            Side::Black
        ));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), PieceKind::King, Side::White);
        board.place(Square::new(7, 7), PieceKind::King, Side::Black);
        board.place(Square::new(3, 3), PieceKind::Pawn, Side::White);
        assert!(space_threatened(&board, Square::new(4, 2), Side::White));
        assert!(space_threatened(&board, Square::new(4, 4), Side::White));
        assert!(!space_threatened(&board, Square::new(2, 2), Side::White));
    }

    #[test]
    fn king_threatens_only_adjacent_square() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), PieceKind::King, Side::White);
        board.place(Square::new(4, 4), PieceKind::King, Side::Black);
        assert!(space_threatened(&board, Square::new(4, 5), Side::Black));
        assert!(!space_threatened(&board, Square::new(4, 6), Side::Black));
    }
}
