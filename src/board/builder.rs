//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of replaying moves from
//! the initial position.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Square, Team};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(4, 7).unwrap(), Team::Plus, PieceKind::King)
//!     .piece(Square::new(4, 0).unwrap(), Team::Minus, PieceKind::King)
//!     .piece(Square::new(7, 7).unwrap(), Team::Plus, PieceKind::Rook)
//!     .build();
//! assert!(!board.is_in_check(Team::Plus));
//! ```

use super::state::BACK_RANK;
use super::{Board, Piece, PieceKind, RulesConfig, Square, Team};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    config: RulesConfig,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            builder = builder
                .piece(Square::at(file, 0), Team::Minus, kind)
                .piece(Square::at(file, 1), Team::Minus, PieceKind::Pawn)
                .piece(Square::at(file, 6), Team::Plus, PieceKind::Pawn)
                .piece(Square::at(file, 7), Team::Plus, kind);
        }
        builder
    }

    /// Place an unmoved piece, replacing whatever was on `square`.
    #[must_use]
    pub fn piece(self, square: Square, team: Team, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, team))
    }

    /// Place a piece that has already moved.
    #[must_use]
    pub fn moved_piece(self, square: Square, team: Team, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, team);
        piece.has_moved = true;
        self.place(square, piece)
    }

    /// Remove any piece on `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        board.config = self.config;
        for (square, piece) in self.pieces {
            board.set(square, Some(piece));
        }
        board
    }

    fn place(mut self, square: Square, piece: Piece) -> Self {
        self = self.clear(square);
        self.pieces.push((square, piece));
        self
    }
}
