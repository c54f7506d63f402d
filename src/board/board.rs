//! The board: an 8x8 grid of piece codes plus per-side piece lists for fast
//! iteration during move generation, mirroring the state a single chess
//! position needs and nothing more.

use super::types::{decode, encode, CastlingRights, PieceCode, PieceKind, Side, Square, EMPTY};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: [[PieceCode; 8]; 8],
    /// Per-side piece lists, indexed by `Side::index()`, giving O(16)
    /// iteration instead of an O(64) grid scan during move generation.
    pub pieces: [Vec<(PieceKind, Square)>; 2],
    pub active_side: Side,
    pub castling: [CastlingRights; 2],
    pub en_passant_target: Option<Square>,
    /// Destination square of the move that produced this position, used by
    /// the quiescence check. `None` for a position with no history (the
    /// initial snapshot).
    pub last_move_to: Option<Square>,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[EMPTY; 8]; 8],
            pieces: [Vec::with_capacity(16), Vec::with_capacity(16)],
            active_side: Side::White,
            castling: [CastlingRights::Both, CastlingRights::Both],
            en_passant_target: None,
            last_move_to: None,
        }
    }

    /// The standard chess starting position, used by tests and the demo binary.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            board.place(Square::new(0, file as i8), kind, Side::White);
            board.place(Square::new(7, file as i8), kind, Side::Black);
        }
        for file in 0..8 {
            board.place(Square::new(1, file), PieceKind::Pawn, Side::White);
            board.place(Square::new(6, file), PieceKind::Pawn, Side::Black);
        }
        board
    }

    pub fn place(&mut self, square: Square, kind: PieceKind, side: Side) {
        let (r, f) = square.index();
        self.grid[r][f] = encode(kind, side);
        self.pieces[side.index()].push((kind, square));
    }

    pub fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)> {
        if !square.on_board() {
            return None;
        }
        let (r, f) = square.index();
        decode(self.grid[r][f])
    }

    pub fn is_empty_at(&self, square: Square) -> bool {
        square.on_board() && self.piece_at(square).is_none()
    }

    pub fn has_piece_of(&self, square: Square, side: Side) -> bool {
        matches!(self.piece_at(square), Some((_, s)) if s == side)
    }

    pub fn king_square(&self, side: Side) -> Square {
        self.pieces[side.index()]
            .iter()
            .find(|(kind, _)| *kind == PieceKind::King)
            .map(|(_, sq)| *sq)
            .unwrap_or_else(|| panic!("board has no {side:?} king: {self:?}"))
    }

    /// Compact one-line FEN-ish rendering, for test failure output and
    /// engine diagnostics. Not a pretty-printer: board display is out of
    /// scope for this crate.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut s = String::new();
            let mut run = 0u8;
            for file in 0..8 {
                let code = self.grid[rank][file];
                if code == EMPTY {
                    run += 1;
                } else {
                    if run > 0 {
                        s.push((b'0' + run) as char);
                        run = 0;
                    }
                    s.push(code as char);
                }
            }
            if run > 0 {
                s.push((b'0' + run) as char);
            }
            ranks.push(s);
        }
        let side = match self.active_side {
            Side::White => 'w',
            Side::Black => 'b',
        };
        let castling = self.castling_fen();
        let ep = self
            .en_passant_target
            .map(|sq| sq.to_algebraic())
            .unwrap_or_else(|| "-".to_string());
        format!("{} {} {} {}", ranks.join("/"), side, castling, ep)
    }

    fn castling_fen(&self) -> String {
        let mut s = String::new();
        if self.castling[Side::White.index()].has_kingside() {
            s.push('K');
        }
        if self.castling[Side::White.index()].has_queenside() {
            s.push('Q');
        }
        if self.castling[Side::Black.index()].has_kingside() {
            s.push('k');
        }
        if self.castling[Side::Black.index()].has_queenside() {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
