pub mod board;
pub mod sync;

pub use board::{Board, MoveError, MoveOutcome, MoveSet, Piece, PieceKind, SpecialMove, Square, Team};
pub use sync::SharedBoard;
