//! Rules configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How castling eligibility treats attacked squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingPolicy {
    /// Only occupancy of the squares between king and rook is checked. The
    /// king may castle out of or through check (it may not land in check).
    #[default]
    Lenient,
    /// The king may not castle while in check nor pass over an attacked square.
    Strict,
}

/// Rules options carried by every board, including speculative copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub castling: CastlingPolicy,
}

impl RulesConfig {
    /// Standard tournament rules: strict castling.
    #[must_use]
    pub const fn strict() -> Self {
        RulesConfig {
            castling: CastlingPolicy::Strict,
        }
    }
}
