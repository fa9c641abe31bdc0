//! Error types for rules-engine operations.

use std::fmt;

use super::{PieceKind, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Text is not of the form `x,y`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected 'x,y'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding pieces from their numeric encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Kind magnitude outside 1-6
    InvalidMagnitude { magnitude: u8 },
    /// Signed value is zero or its magnitude is outside 1-6
    InvalidValue { value: i8 },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidMagnitude { magnitude } => {
                write!(f, "Invalid piece magnitude {magnitude} (must be 1-6)")
            }
            PieceError::InvalidValue { value } => {
                write!(f, "Invalid piece value {value}")
            }
        }
    }
}

impl std::error::Error for PieceError {}

/// Error type for move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the origin square
    EmptySquare { square: Square },
    /// Destination is not among the legal destinations of the origin
    Illegal { from: Square, to: Square },
    /// The promotion provider chose a kind a pawn cannot become
    InvalidPromotion { kind: PieceKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on square {square}")
            }
            MoveError::Illegal { from, to } => {
                write!(f, "Not a valid move: ({from}) -> ({to})")
            }
            MoveError::InvalidPromotion { kind } => {
                write!(
                    f,
                    "Invalid promotion choice {kind:?} (magnitude {})",
                    kind.magnitude()
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for the signed-value board encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Text board did not hold exactly 64 values
    WrongLength { found: usize },
    /// A token was not an integer
    InvalidToken { token: String },
    /// A value did not decode to a piece
    InvalidPiece { square: Square, source: PieceError },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::WrongLength { found } => {
                write!(f, "Board must have 64 values, found {found}")
            }
            EncodingError::InvalidToken { token } => {
                write!(f, "Invalid board value '{token}'")
            }
            EncodingError::InvalidPiece { square, source } => {
                write!(f, "Invalid piece on square {square}: {source}")
            }
        }
    }
}

impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodingError::InvalidPiece { source, .. } => Some(source),
            _ => None,
        }
    }
}
