//! Pseudo-legal move generation per piece kind, and the legality filter that
//! turns pseudo-legal moves into the set a player may actually play.

use super::attacks::{in_check, DIAGONAL_DIRS, KNIGHT_OFFSETS, ORTHOGONAL_DIRS};
use super::board::Board;
use super::chess_move::Move;
use super::types::{encode, CastleSide, PieceKind, Promotion, Side, Square};
use crate::search::zobrist;

const ROYAL_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Every pseudo-legal move for `side`: obeys piece movement rules and does
/// not move through or capture a friendly piece, but does not yet check
/// whether the mover's own king ends up attacked.
pub fn pseudo_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let parent_hash = zobrist::compute_hash(board);
    let mut moves = Vec::with_capacity(40);
    for &(kind, from) in board.pieces[side.index()].clone().iter() {
        match kind {
            PieceKind::Pawn => generate_pawn_moves(board, side, from, parent_hash, &mut moves),
            PieceKind::Knight => generate_offset_moves(
                board,
                side,
                from,
                kind,
                &KNIGHT_OFFSETS,
                parent_hash,
                &mut moves,
            ),
            PieceKind::Bishop => {
                generate_sliding_moves(board, side, from, kind, &DIAGONAL_DIRS, parent_hash, &mut moves)
            }
            PieceKind::Rook => generate_sliding_moves(
                board,
                side,
                from,
                kind,
                &ORTHOGONAL_DIRS,
                parent_hash,
                &mut moves,
            ),
            PieceKind::Queen => {
                generate_sliding_moves(board, side, from, kind, &DIAGONAL_DIRS, parent_hash, &mut moves);
                generate_sliding_moves(
                    board,
                    side,
                    from,
                    kind,
                    &ORTHOGONAL_DIRS,
                    parent_hash,
                    &mut moves,
                );
            }
            PieceKind::King => {
                generate_offset_moves(
                    board,
                    side,
                    from,
                    kind,
                    &ROYAL_OFFSETS,
                    parent_hash,
                    &mut moves,
                );
                generate_castling_moves(board, side, from, parent_hash, &mut moves);
            }
        }
    }
    moves
}

/// Pseudo-legal moves filtered down to those that leave the mover's own king
/// safe. Castling additionally requires the mover not be in check before the
/// move; per the known gap documented in the design notes, the squares the
/// king transits (but does not land on) are never tested for attack.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    pseudo_legal_moves(board, side)
        .into_iter()
        .filter(|mv| {
            if mv.castle.is_some() && in_check(board, side) {
                return false;
            }
            let after = board.apply(mv);
            !in_check(&after, side)
        })
        .collect()
}

fn generate_pawn_moves(
    board: &Board,
    side: Side,
    from: Square,
    parent_hash: u64,
    out: &mut Vec<Move>,
) {
    let forward = side.pawn_forward();
    let promo_rank = side.promotion_rank();
    let one_ahead = from.offset(forward, 0);

    if board.is_empty_at(one_ahead) {
        push_pawn_move(side, from, one_ahead, 0, false, promo_rank, parent_hash, out);
        if from.rank == side.pawn_home_rank() {
            let two_ahead = from.offset(2 * forward, 0);
            if board.is_empty_at(two_ahead) {
                out.push(Move {
                    from,
                    to: two_ahead,
                    moved_kind: PieceKind::Pawn,
                    captured_code: 0,
                    promotion: None,
                    castle: None,
                    en_passant: false,
                    parent_hash,
                });
            }
        }
    }

    for df in [-1, 1] {
        let target = from.offset(forward, df);
        if !target.on_board() {
            continue;
        }
        if let Some((_, opp_side)) = board.piece_at(target) {
            if opp_side != side {
                let (r, f) = target.index();
                let captured = board.grid[r][f];
                push_pawn_move(
                    side,
                    from,
                    target,
                    captured,
                    false,
                    promo_rank,
                    parent_hash,
                    out,
                );
            }
            continue;
        }
        if Some(target) == board.en_passant_target {
            let passed_rank = if side == Side::White {
                target.rank - 1
            } else {
                target.rank + 1
            };
            let passed = Square::new(passed_rank, target.file);
            if matches!(board.piece_at(passed), Some((PieceKind::Pawn, opp)) if opp == side.opponent())
            {
                out.push(Move {
                    from,
                    to: target,
                    moved_kind: PieceKind::Pawn,
                    captured_code: encode(PieceKind::Pawn, side.opponent()),
                    promotion: None,
                    castle: None,
                    en_passant: true,
                    parent_hash,
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn push_pawn_move(
    side: Side,
    from: Square,
    to: Square,
    captured_code: u8,
    en_passant: bool,
    promo_rank: i8,
    parent_hash: u64,
    out: &mut Vec<Move>,
) {
    if to.rank == promo_rank {
        for promo in Promotion::ALL {
            out.push(Move {
                from,
                to,
                moved_kind: PieceKind::Pawn,
                captured_code,
                promotion: Some(promo),
                castle: None,
                en_passant,
                parent_hash,
            });
        }
    } else {
        out.push(Move {
            from,
            to,
            moved_kind: PieceKind::Pawn,
            captured_code,
            promotion: None,
            castle: None,
            en_passant,
            parent_hash,
        });
    }
}

fn generate_offset_moves(
    board: &Board,
    side: Side,
    from: Square,
    kind: PieceKind,
    offsets: &[(i8, i8)],
    parent_hash: u64,
    out: &mut Vec<Move>,
) {
    for &(dr, df) in offsets {
        let to = from.offset(dr, df);
        if !to.on_board() {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(quiet(kind, from, to, parent_hash)),
            Some((_, opp_side)) if opp_side != side => {
                let (r, f) = to.index();
                out.push(capture(kind, from, to, board.grid[r][f], parent_hash));
            }
            Some(_) => {}
        }
    }
}

fn generate_sliding_moves(
    board: &Board,
    side: Side,
    from: Square,
    kind: PieceKind,
    dirs: &[(i8, i8); 4],
    parent_hash: u64,
    out: &mut Vec<Move>,
) {
    for &(dr, df) in dirs {
        let mut to = from;
        loop {
            to = to.offset(dr, df);
            if !to.on_board() {
                break;
            }
            match board.piece_at(to) {
                None => out.push(quiet(kind, from, to, parent_hash)),
                Some((_, opp_side)) if opp_side != side => {
                    let (r, f) = to.index();
                    out.push(capture(kind, from, to, board.grid[r][f], parent_hash));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

fn generate_castling_moves(
    board: &Board,
    side: Side,
    from: Square,
    parent_hash: u64,
    out: &mut Vec<Move>,
) {
    let rights = board.castling[side.index()];
    let rank = from.rank;

    if rights.has_kingside()
        && board.is_empty_at(Square::new(rank, 5))
        && board.is_empty_at(Square::new(rank, 6))
        && matches!(board.piece_at(Square::new(rank, 7)), Some((PieceKind::Rook, s)) if s == side)
    {
        out.push(Move {
            from,
            to: Square::new(rank, 6),
            moved_kind: PieceKind::King,
            captured_code: 0,
            promotion: None,
            castle: Some(CastleSide::Kingside),
            en_passant: false,
            parent_hash,
        });
    }

    if rights.has_queenside()
        && board.is_empty_at(Square::new(rank, 1))
        && board.is_empty_at(Square::new(rank, 2))
        && board.is_empty_at(Square::new(rank, 3))
        && matches!(board.piece_at(Square::new(rank, 0)), Some((PieceKind::Rook, s)) if s == side)
    {
        out.push(Move {
            from,
            to: Square::new(rank, 2),
            moved_kind: PieceKind::King,
            captured_code: 0,
            promotion: None,
            castle: Some(CastleSide::Queenside),
            en_passant: false,
            parent_hash,
        });
    }
}

fn quiet(kind: PieceKind, from: Square, to: Square, parent_hash: u64) -> Move {
    Move {
        from,
        to,
        moved_kind: kind,
        captured_code: 0,
        promotion: None,
        castle: None,
        en_passant: false,
        parent_hash,
    }
}

fn capture(kind: PieceKind, from: Square, to: Square, captured_code: u8, parent_hash: u64) -> Move {
    Move {
        from,
        to,
        moved_kind: kind,
        captured_code,
        promotion: None,
        castle: None,
        en_passant: false,
        parent_hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let board = Board::starting_position();
        assert_eq!(legal_moves(&board, Side::White).len(), 20);
    }

    #[test]
    fn king_cannot_move_into_check() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(7, 0), PieceKind::King, Side::Black);
        board.place(Square::new(7, 4), PieceKind::Rook, Side::Black);
        let moves = legal_moves(&board, Side::White);
        assert!(!moves.iter().any(|m| m.to == Square::new(1, 4)));
        assert!(moves.iter().any(|m| m.to == Square::new(0, 3)));
    }

    #[test]
    fn pinned_piece_cannot_move_off_the_pin_line() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(3, 4), PieceKind::Rook, Side::White);
        board.place(Square::new(7, 4), PieceKind::Rook, Side::Black);
        board.place(Square::new(7, 0), PieceKind::King, Side::Black);
        let moves = legal_moves(&board, Side::White);
        let rook_moves: Vec<_> = moves
            .iter()
            .filter(|m| m.from == Square::new(3, 4))
            .collect();
        assert!(rook_moves.iter().all(|m| m.to.file == 4));
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(0, 7), PieceKind::Rook, Side::White);
        board.place(Square::new(7, 4), PieceKind::King, Side::Black);
        board.place(Square::new(4, 4), PieceKind::Rook, Side::Black);
        let moves = legal_moves(&board, Side::White);
        assert!(!moves.iter().any(|m| m.castle.is_some()));
    }

    #[test]
    fn empty_legal_moves_signals_checkmate_or_stalemate() {
        // Classic back-rank mate: Black king boxed in on h8 by its own
        // pawns, White rook checking along the 8th rank from a8.
        let mut board = Board::empty();
        board.place(Square::new(7, 7), PieceKind::King, Side::Black);
        board.place(Square::new(6, 6), PieceKind::Pawn, Side::Black);
        board.place(Square::new(6, 7), PieceKind::Pawn, Side::Black);
        board.place(Square::new(7, 0), PieceKind::Rook, Side::White);
        board.place(Square::new(0, 3), PieceKind::King, Side::White);
        board.active_side = Side::Black;
        assert!(legal_moves(&board, Side::Black).is_empty());
    }
}
