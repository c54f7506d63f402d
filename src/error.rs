//! The crate's one input-validation boundary. Everything past a
//! successfully constructed `Board` is assumed valid; a broken invariant
//! there is an engine bug and is reported with a panic, not a `Result`.

use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// The FEN castling/en-passant metadata field did not have the expected
    /// whitespace-separated `<castling> <en-passant>` shape.
    MalformedMetadata(String),
    InvalidCastlingChar(char),
    UnparseableSquare(String),
    /// Every piece was filtered out, or one side is missing its king.
    MissingKing,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MalformedMetadata(field) => {
                write!(f, "malformed castling/en-passant metadata: {field:?}")
            }
            SnapshotError::InvalidCastlingChar(c) => {
                write!(f, "invalid castling character: {c:?}")
            }
            SnapshotError::UnparseableSquare(s) => {
                write!(f, "unparseable square text: {s:?}")
            }
            SnapshotError::MissingKing => write!(f, "snapshot has a side with no king"),
        }
    }
}

impl std::error::Error for SnapshotError {}
