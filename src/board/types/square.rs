//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, as (file, rank), both 0-7.
///
/// (0, 0) is the top-left of the internal grid, which is the `Minus` team's
/// back-rank corner. Squares can only be built through checked constructors,
/// so every `Square` is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    // rank first so the derived ordering is row-major
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Offset by a signed (file, rank) delta, or `None` if that leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    // Only for literals known to be on the board.
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square { rank, file }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.file, self.rank)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::at(file as u8, rank as u8))
    }
}

/// Parses the `"x,y"` form used by move lists on the wire.
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let (file, rank) = s.trim().split_once(',').ok_or_else(invalid)?;
        let file: usize = file.trim().parse().map_err(|_| invalid())?;
        let rank: usize = rank.trim().parse().map_err(|_| invalid())?;
        Square::try_from((file, rank))
    }
}

/// Join squares as space-separated `"x,y"` pairs.
#[must_use]
pub fn format_squares<'a>(squares: impl IntoIterator<Item = &'a Square>) -> String {
    squares
        .into_iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a space-separated list of `"x,y"` pairs. An empty string is an empty list.
pub fn parse_squares(s: &str) -> Result<Vec<Square>, SquareError> {
    s.split_whitespace().map(str::parse).collect()
}
