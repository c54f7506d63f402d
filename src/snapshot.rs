//! Turning an external game snapshot into a `Board`. This is the one
//! recoverable-error boundary in the crate: everything past here operates
//! on an already-valid board and panics on an invariant violation instead
//! of returning a `Result`.

use crate::board::board::Board;
use crate::board::types::{CastlingRights, PieceKind, Side, Square};
use crate::error::SnapshotError;
use serde::Deserialize;

/// One piece as delivered by the external game client: an owner id (0 for
/// White, 1 for Black), a full kind name ("pawn", "knight", ...), and an
/// algebraic square.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotPiece {
    pub owner: u8,
    pub kind: String,
    pub square: String,
}

/// The external snapshot this crate consumes. `castling_and_en_passant`
/// holds exactly FEN fields 3 and 4 (e.g. `"KQkq e3"` or `"- -"`); full
/// board-placement FEN parsing is not needed since pieces arrive as an
/// explicit list. `clock_remaining_ms` is carried through for
/// observability only — the search does not consult it.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSnapshot {
    pub active_player: u8,
    pub pieces: Vec<SnapshotPiece>,
    pub castling_and_en_passant: String,
    pub clock_remaining_ms: u64,
}

pub fn board_from_snapshot(snapshot: &GameSnapshot) -> Result<Board, SnapshotError> {
    let mut board = Board::empty();
    board.active_side = side_from_owner(snapshot.active_player);

    for piece in &snapshot.pieces {
        let Some(kind) = PieceKind::from_name(&piece.kind) else {
            eprintln!(
                "warning: unknown piece kind {:?} in snapshot, skipping",
                piece.kind
            );
            continue;
        };
        let square = Square::from_algebraic(&piece.square)
            .ok_or_else(|| SnapshotError::UnparseableSquare(piece.square.clone()))?;
        board.place(square, kind, side_from_owner(piece.owner));
    }

    let (castling, en_passant) = parse_metadata(&snapshot.castling_and_en_passant)?;
    board.castling = castling;
    board.en_passant_target = en_passant;

    for side in [Side::White, Side::Black] {
        if !board.pieces[side.index()]
            .iter()
            .any(|(kind, _)| *kind == PieceKind::King)
        {
            return Err(SnapshotError::MissingKing);
        }
    }

    Ok(board)
}

fn side_from_owner(owner: u8) -> Side {
    if owner == 0 {
        Side::White
    } else {
        Side::Black
    }
}

fn parse_metadata(field: &str) -> Result<([CastlingRights; 2], Option<Square>), SnapshotError> {
    let mut parts = field.split_whitespace();
    let castling_str = parts
        .next()
        .ok_or_else(|| SnapshotError::MalformedMetadata(field.to_string()))?;
    let en_passant_str = parts
        .next()
        .ok_or_else(|| SnapshotError::MalformedMetadata(field.to_string()))?;
    if parts.next().is_some() {
        return Err(SnapshotError::MalformedMetadata(field.to_string()));
    }

    let mut white_kingside = false;
    let mut white_queenside = false;
    let mut black_kingside = false;
    let mut black_queenside = false;
    if castling_str != "-" {
        for c in castling_str.chars() {
            match c {
                'K' => white_kingside = true,
                'Q' => white_queenside = true,
                'k' => black_kingside = true,
                'q' => black_queenside = true,
                other => return Err(SnapshotError::InvalidCastlingChar(other)),
            }
        }
    }
    let white = CastlingRights::None
        .with_kingside(white_kingside)
        .with_queenside(white_queenside);
    let black = CastlingRights::None
        .with_kingside(black_kingside)
        .with_queenside(black_queenside);

    let en_passant = if en_passant_str == "-" {
        None
    } else {
        Some(
            Square::from_algebraic(en_passant_str)
                .ok_or_else(|| SnapshotError::UnparseableSquare(en_passant_str.to_string()))?,
        )
    };

    Ok(([white, black], en_passant))
}
