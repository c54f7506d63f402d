//! Primitive chess types: squares, sides, piece kinds, the byte-sized piece
//! code stored in the board grid, and per-side castling rights.

use std::fmt;

/// A board square as a (rank, file) pair, both in `0..=7` when on-board.
///
/// Off-board squares (negative rank/file, produced while walking attack rays
/// or move offsets off the edge of the board) are representable but are
/// never stored in a [`crate::board::Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    pub const fn on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Square::new(self.rank + d_rank, self.file + d_file)
    }

    pub fn index(self) -> (usize, usize) {
        debug_assert!(self.on_board());
        (self.rank as usize, self.file as usize)
    }

    /// Parses algebraic notation such as `"e4"`. Returns `None` on malformed input.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file_ch = chars.next()?;
        let rank_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return None;
        }
        let file = (file_ch as u8 - b'a') as i8;
        let rank = (rank_ch as u8 - b'1') as i8;
        Some(Square::new(rank, file))
    }

    pub fn to_algebraic(self) -> String {
        debug_assert!(self.on_board());
        format!(
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + self.rank as u8) as char
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Direction a pawn of this side advances, in ranks: +1 for White, -1 for Black.
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Home rank a pawn of this side starts on.
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    pub const fn promotion_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    fn ascii_upper(self) -> u8 {
        match self {
            PieceKind::Pawn => b'P',
            PieceKind::Knight => b'N',
            PieceKind::Bishop => b'B',
            PieceKind::Rook => b'R',
            PieceKind::Queen => b'Q',
            PieceKind::King => b'K',
        }
    }

    /// Parses a full kind name ("pawn", "knight", ...) case-insensitively, as
    /// delivered by an external game snapshot. Returns `None` for anything
    /// else so the caller can log a warning and skip the piece.
    pub fn from_name(name: &str) -> Option<PieceKind> {
        match name.to_ascii_lowercase().as_str() {
            "pawn" => Some(PieceKind::Pawn),
            "knight" => Some(PieceKind::Knight),
            "bishop" => Some(PieceKind::Bishop),
            "rook" => Some(PieceKind::Rook),
            "queen" => Some(PieceKind::Queen),
            "king" => Some(PieceKind::King),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece kind a pawn may promote to (the king and pawn are excluded by construction).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    pub const fn to_kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }
}

/// Single-byte piece encoding stored in the board grid: the ASCII piece
/// letter, uppercase for White and lowercase for Black, `0` for an empty
/// square.
pub type PieceCode = u8;

pub const EMPTY: PieceCode = 0;

pub fn encode(kind: PieceKind, side: Side) -> PieceCode {
    let upper = kind.ascii_upper();
    match side {
        Side::White => upper,
        Side::Black => upper.to_ascii_lowercase(),
    }
}

pub fn decode(code: PieceCode) -> Option<(PieceKind, Side)> {
    if code == EMPTY {
        return None;
    }
    let side = if code.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    let kind = match code.to_ascii_uppercase() {
        b'P' => PieceKind::Pawn,
        b'N' => PieceKind::Knight,
        b'B' => PieceKind::Bishop,
        b'R' => PieceKind::Rook,
        b'Q' => PieceKind::Queen,
        b'K' => PieceKind::King,
        _ => return None,
    };
    Some((kind, side))
}

/// Per-side castling rights: a closed set of four states rather than two
/// independent booleans, matching the closed enum in the data model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastlingRights {
    None,
    KingsideOnly,
    QueensideOnly,
    Both,
}

impl CastlingRights {
    pub const fn has_kingside(self) -> bool {
        matches!(self, CastlingRights::KingsideOnly | CastlingRights::Both)
    }

    pub const fn has_queenside(self) -> bool {
        matches!(self, CastlingRights::QueensideOnly | CastlingRights::Both)
    }

    pub const fn with_kingside(self, add: bool) -> Self {
        Self::from_bools(add, self.has_queenside())
    }

    pub const fn with_queenside(self, add: bool) -> Self {
        Self::from_bools(self.has_kingside(), add)
    }

    pub const fn remove_kingside(self) -> Self {
        self.with_kingside(false)
    }

    pub const fn remove_queenside(self) -> Self {
        self.with_queenside(false)
    }

    const fn from_bools(kingside: bool, queenside: bool) -> Self {
        match (kingside, queenside) {
            (false, false) => CastlingRights::None,
            (true, false) => CastlingRights::KingsideOnly,
            (false, true) => CastlingRights::QueensideOnly,
            (true, true) => CastlingRights::Both,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_algebraic_round_trip() {
        let sq = Square::from_algebraic("e4").unwrap();
        assert_eq!(sq, Square::new(3, 4));
        assert_eq!(sq.to_algebraic(), "e4");
    }

    #[test]
    fn square_rejects_malformed_text() {
        assert_eq!(Square::from_algebraic("z9"), None);
        assert_eq!(Square::from_algebraic("e"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
    }

    #[test]
    fn piece_code_round_trips_every_kind_and_side() {
        for kind in PieceKind::ALL {
            for side in [Side::White, Side::Black] {
                let code = encode(kind, side);
                assert_eq!(decode(code), Some((kind, side)));
            }
        }
    }

    #[test]
    fn empty_code_decodes_to_none() {
        assert_eq!(decode(EMPTY), None);
    }

    #[test]
    fn castling_rights_degrade_one_side_at_a_time() {
        let both = CastlingRights::Both;
        assert_eq!(both.remove_kingside(), CastlingRights::QueensideOnly);
        assert_eq!(both.remove_queenside(), CastlingRights::KingsideOnly);
        assert_eq!(
            both.remove_kingside().remove_queenside(),
            CastlingRights::None
        );
    }
}
