//! Applying a `Move` to a `Board`, producing the resulting position.

use super::board::Board;
use super::chess_move::Move;
use super::types::{encode, CastleSide, PieceKind, Side, Square, EMPTY};

impl Board {
    /// Returns the board resulting from playing `mv`. Does not check
    /// legality; callers are expected to only apply moves drawn from
    /// [`crate::board::movegen::legal_moves`].
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let side = self.active_side;

        next.remove_piece(mv.from);
        if mv.en_passant {
            let captured_rank = if side == Side::White {
                mv.to.rank - 1
            } else {
                mv.to.rank + 1
            };
            next.remove_piece(Square::new(captured_rank, mv.to.file));
        } else if mv.captured_code != 0 {
            next.remove_piece(mv.to);
        }

        let placed_kind = match mv.promotion {
            Some(promo) => promo.to_kind(),
            None => mv.moved_kind,
        };
        next.place(mv.to, placed_kind, side);

        if let Some(castle_side) = mv.castle {
            let rank = mv.from.rank;
            let (rook_from_file, rook_to_file) = match castle_side {
                CastleSide::Kingside => (7, 5),
                CastleSide::Queenside => (0, 3),
            };
            next.remove_piece(Square::new(rank, rook_from_file));
            next.place(Square::new(rank, rook_to_file), PieceKind::Rook, side);
        }

        next.update_castling_rights(mv, side);
        next.en_passant_target = Self::next_en_passant_target(mv, side);
        next.active_side = side.opponent();
        next.last_move_to = Some(mv.to);
        next
    }

    fn remove_piece(&mut self, square: Square) {
        let (r, f) = square.index();
        self.grid[r][f] = EMPTY;
        for list in self.pieces.iter_mut() {
            if let Some(pos) = list.iter().position(|&(_, sq)| sq == square) {
                list.remove(pos);
                return;
            }
        }
    }

    fn update_castling_rights(&mut self, mv: &Move, side: Side) {
        if mv.moved_kind == PieceKind::King {
            self.castling[side.index()] = crate::board::types::CastlingRights::None;
        }
        let home_rank = match side {
            Side::White => 0,
            Side::Black => 7,
        };
        let queenside_rook = Square::new(home_rank, 0);
        let kingside_rook = Square::new(home_rank, 7);
        let expected_rook_code = encode(PieceKind::Rook, side);
        if self.grid[queenside_rook.index().0][queenside_rook.index().1] != expected_rook_code {
            self.castling[side.index()] = self.castling[side.index()].remove_queenside();
        }
        if self.grid[kingside_rook.index().0][kingside_rook.index().1] != expected_rook_code {
            self.castling[side.index()] = self.castling[side.index()].remove_kingside();
        }
        // A rook captured on its own home square also loses the opponent nothing
        // and the mover everything; check the opponent's rook squares too, in
        // case this move captured a rook still standing on its home file.
        let opponent = side.opponent();
        let opp_home_rank = match opponent {
            Side::White => 0,
            Side::Black => 7,
        };
        let opp_expected_rook = encode(PieceKind::Rook, opponent);
        let opp_queenside = Square::new(opp_home_rank, 0);
        let opp_kingside = Square::new(opp_home_rank, 7);
        if self.grid[opp_queenside.index().0][opp_queenside.index().1] != opp_expected_rook {
            self.castling[opponent.index()] = self.castling[opponent.index()].remove_queenside();
        }
        if self.grid[opp_kingside.index().0][opp_kingside.index().1] != opp_expected_rook {
            self.castling[opponent.index()] = self.castling[opponent.index()].remove_kingside();
        }
    }

    fn next_en_passant_target(mv: &Move, side: Side) -> Option<Square> {
        if mv.moved_kind != PieceKind::Pawn {
            return None;
        }
        let delta = mv.to.rank - mv.from.rank;
        if delta == 2 || delta == -2 {
            Some(Square::new((mv.from.rank + mv.to.rank) / 2, mv.from.file))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::movegen::{legal_moves, pseudo_legal_moves};

    fn find<'a>(moves: &'a [Move], from: &str, to: &str) -> &'a Move {
        let from = Square::from_algebraic(from).unwrap();
        let to = Square::from_algebraic(to).unwrap();
        moves
            .iter()
            .find(|m| m.from == from && m.to == to)
            .unwrap_or_else(|| panic!("no move {from}-{to} in {moves:?}"))
    }

    #[test]
    fn double_pawn_push_sets_en_passant_target() {
        let board = Board::starting_position();
        let moves = legal_moves(&board, Side::White);
        let mv = find(&moves, "e2", "e4");
        let next = board.apply(mv);
        assert_eq!(next.en_passant_target, Square::from_algebraic("e3"));
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(7, 4), PieceKind::King, Side::Black);
        board.place(Square::new(4, 4), PieceKind::Pawn, Side::White);
        board.place(Square::new(6, 3), PieceKind::Pawn, Side::Black);
        board.active_side = Side::Black;
        let moves = pseudo_legal_moves(&board, Side::Black);
        let double_push = find(&moves, "d7", "d5");
        let after_push = board.apply(double_push);
        assert_eq!(after_push.en_passant_target, Square::from_algebraic("d6"));

        let captures = pseudo_legal_moves(&after_push, Side::White);
        let ep = find(&captures, "e5", "d6");
        assert!(ep.en_passant);
        let after_ep = after_push.apply(ep);
        assert_eq!(after_ep.piece_at(Square::new(4, 3)), None);
    }

    #[test]
    fn castling_moves_the_rook() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(0, 7), PieceKind::Rook, Side::White);
        board.place(Square::new(7, 4), PieceKind::King, Side::Black);
        let moves = legal_moves(&board, Side::White);
        let castle = find(&moves, "e1", "g1");
        let next = board.apply(castle);
        assert_eq!(
            next.piece_at(Square::new(0, 5)),
            Some((PieceKind::Rook, Side::White))
        );
        assert_eq!(next.piece_at(Square::new(0, 7)), None);
    }

    #[test]
    fn king_move_forfeits_castling_rights() {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), PieceKind::King, Side::White);
        board.place(Square::new(0, 7), PieceKind::Rook, Side::White);
        board.place(Square::new(7, 4), PieceKind::King, Side::Black);
        let moves = pseudo_legal_moves(&board, Side::White);
        let step = find(&moves, "e1", "e2");
        let next = board.apply(step);
        assert_eq!(
            next.castling[Side::White.index()],
            crate::board::types::CastlingRights::None
        );
    }
}
