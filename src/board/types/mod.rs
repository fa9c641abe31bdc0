//! Core rules-engine types.
//!
//! - `PieceKind`, `Team` and `Piece` - what occupies a square
//! - `Square` - checked board coordinate
//! - `SpecialMove` and `MoveSet` - generation results

mod moves;
mod piece;
mod square;

pub use moves::{MoveSet, SpecialMove, TaggedMove};
pub use piece::{Piece, PieceKind, Team};
pub use square::{format_squares, parse_squares, Square};
