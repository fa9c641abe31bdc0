//! Board state and game rules.
//!
//! An 8x8 grid of optional pieces with legal move generation, check
//! detection and move execution, including castling and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square, Team};
//!
//! let mut board = Board::new();
//! let from = Square::new(4, 6).unwrap();
//! let moves = board.legal_moves(from).unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! board.execute_move(from, Square::new(4, 4).unwrap()).unwrap();
//! assert!(!board.is_in_check(Team::Minus));
//! ```

mod builder;
mod config;
mod encoding;
mod error;
mod execute;
mod movegen;
mod promotion;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{CastlingPolicy, RulesConfig};
pub use error::{EncodingError, MoveError, PieceError, SquareError};
pub use execute::MoveOutcome;
pub use movegen::Mode;
pub use promotion::{AlwaysQueen, PromotionChooser};
pub use state::Board;
pub use types::{
    format_squares, parse_squares, MoveSet, Piece, PieceKind, SpecialMove, Square, TaggedMove,
    Team,
};
