pub mod apply;
pub mod attacks;
#[allow(clippy::module_inception)]
pub mod board;
pub mod chess_move;
pub mod movegen;
pub mod types;

pub use attacks::{in_check, is_non_quiescent, space_threatened};
pub use board::Board;
pub use chess_move::Move;
pub use movegen::{legal_moves, pseudo_legal_moves};
pub use types::{
    decode, encode, CastleSide, CastlingRights, PieceCode, PieceKind, Promotion, Side, Square,
};
