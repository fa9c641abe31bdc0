//! Promotion-choice providers.
//!
//! A provider is asked once per promoting move, with the destination square,
//! which kind the pawn becomes. Closures `FnMut(Square) -> PieceKind` are
//! providers too:
//!
//! ```
//! use chess_rules::board::{Board, PieceKind, Square};
//!
//! let mut board = Board::new();
//! let from = Square::new(4, 6).unwrap();
//! let to = Square::new(4, 4).unwrap();
//! board.execute_move_with(from, to, &mut |_sq: Square| PieceKind::Knight).unwrap();
//! ```

use super::{PieceKind, Square};

/// Picks the kind a promoting pawn becomes.
///
/// Implementations must return one of `PieceKind::PROMOTION_TARGETS`; the
/// engine rejects anything else without touching the board.
pub trait PromotionChooser {
    fn choose(&mut self, square: Square) -> PieceKind;
}

/// Always promotes to a queen. Used for headless play and speculative probes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose(&mut self, _square: Square) -> PieceKind {
        PieceKind::Queen
    }
}

impl<F> PromotionChooser for F
where
    F: FnMut(Square) -> PieceKind,
{
    fn choose(&mut self, square: Square) -> PieceKind {
        self(square)
    }
}
