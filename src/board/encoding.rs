//! Signed-value board encoding.
//!
//! Each cell is `team sign * kind magnitude`, 0 when empty. The text form is
//! the 64 values row-major from rank 0, separated by single spaces.

use super::{Board, EncodingError, Piece, RulesConfig, Square};

impl Board {
    /// Signed values indexed `[rank][file]`.
    #[must_use]
    pub fn values(&self) -> [[i8; 8]; 8] {
        self.squares
            .map(|rank| rank.map(|cell| cell.map_or(0, Piece::value)))
    }

    /// The 64 signed values joined by spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.values()
            .iter()
            .flatten()
            .map(i8::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rebuild a board from signed values.
    ///
    /// Values carry no move history: a piece standing where the initial
    /// position has the same value is taken as unmoved, any other as moved.
    pub fn from_values(
        values: &[[i8; 8]; 8],
        config: RulesConfig,
    ) -> Result<Board, EncodingError> {
        let start = Board::new();
        let mut board = Board::empty();
        board.config = config;

        for square in Square::all() {
            let value = values[square.rank() as usize][square.file() as usize];
            if value == 0 {
                continue;
            }
            let mut piece = Piece::from_value(value)
                .map_err(|source| EncodingError::InvalidPiece { square, source })?;
            piece.has_moved = start.get(square).map(Piece::value) != Some(value);
            board.set(square, Some(piece));
        }
        Ok(board)
    }

    /// Parse the text form produced by [`Board::to_text`], with default rules.
    pub fn from_text(text: &str) -> Result<Board, EncodingError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 64 {
            return Err(EncodingError::WrongLength {
                found: tokens.len(),
            });
        }

        let mut values = [[0i8; 8]; 8];
        for (i, token) in tokens.iter().enumerate() {
            values[i / 8][i % 8] = token.parse().map_err(|_| EncodingError::InvalidToken {
                token: (*token).to_string(),
            })?;
        }
        Board::from_values(&values, RulesConfig::default())
    }
}
