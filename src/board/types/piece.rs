//! Piece, kind and team types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceError;

/// Chess piece kinds.
///
/// The discriminants are the magnitudes used by the signed board encoding:
/// 1=King, 2=Queen, 3=Bishop, 4=Knight, 5=Rook, 6=Pawn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Bishop = 3,
    Knight = 4,
    Rook = 5,
    Pawn = 6,
}

impl PieceKind {
    /// All piece kinds in magnitude order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Kinds a pawn may promote to, queen first
    pub const PROMOTION_TARGETS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    #[must_use]
    pub const fn magnitude(self) -> u8 {
        self as u8
    }

    /// Parse a kind from its encoded magnitude (1-6).
    pub fn from_magnitude(magnitude: u8) -> Result<PieceKind, PieceError> {
        match magnitude {
            1 => Ok(PieceKind::King),
            2 => Ok(PieceKind::Queen),
            3 => Ok(PieceKind::Bishop),
            4 => Ok(PieceKind::Knight),
            5 => Ok(PieceKind::Rook),
            6 => Ok(PieceKind::Pawn),
            _ => Err(PieceError::InvalidMagnitude { magnitude }),
        }
    }

    /// Returns true if a pawn may be promoted to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Returns true if this kind moves by ray tracing (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// The two sides. `Plus` pieces start on ranks 6-7 and advance toward rank 0,
/// `Minus` pieces start on ranks 0-1 and advance toward rank 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    Plus,
    Minus,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::Plus, Team::Minus];

    /// Sign of this team's encoded values (+1 or -1)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Team::Plus => 1,
            Team::Minus => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Plus => Team::Minus,
            Team::Minus => Team::Plus,
        }
    }

    /// Rank delta of a single pawn step
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        -self.sign()
    }

    /// The rank a pawn of this team promotes on
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Team::Plus => 0,
            Team::Minus => 7,
        }
    }

    /// Home rank of this team's king and rooks
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Team::Plus => 7,
            Team::Minus => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Plus => write!(f, "+1"),
            Team::Minus => write!(f, "-1"),
        }
    }
}

/// A piece on the board.
///
/// `has_moved` is monotonic: once set it is never cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Piece {
            kind,
            team,
            has_moved: false,
        }
    }

    /// Decode an unmoved piece from its signed value (e.g. -5 is a `Minus` rook).
    pub fn from_value(value: i8) -> Result<Piece, PieceError> {
        let team = match value.signum() {
            1 => Team::Plus,
            -1 => Team::Minus,
            _ => return Err(PieceError::InvalidValue { value }),
        };
        let kind = PieceKind::from_magnitude(value.unsigned_abs())
            .map_err(|_| PieceError::InvalidValue { value })?;
        Ok(Piece::new(kind, team))
    }

    /// Signed encoded value: `team sign * kind magnitude`
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        self.team.sign() * self.kind.magnitude() as i8
    }

    #[inline]
    #[must_use]
    pub fn is_enemy_of(self, team: Team) -> bool {
        self.team != team
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind.to_char();
        match self.team {
            Team::Plus => write!(f, "{}", c.to_ascii_uppercase()),
            Team::Minus => write!(f, "{c}"),
        }
    }
}
