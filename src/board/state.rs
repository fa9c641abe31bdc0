use super::{Piece, PieceKind, RulesConfig, Square, Team};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Back rank from file 0 to file 7.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// `Board` is a plain value: cloning it is a full, unaliased copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) config: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard initial position with default rules.
    pub fn new() -> Self {
        Board::with_config(RulesConfig::default())
    }

    /// The standard initial position with the given rules.
    pub fn with_config(config: RulesConfig) -> Self {
        let mut board = Board::empty();
        board.config = config;
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for team in Team::BOTH {
                let pawn_rank = (team.back_rank() as i8 + team.pawn_direction()) as u8;
                board.set(Square::at(file, team.back_rank()), Some(Piece::new(kind, team)));
                board.set(
                    Square::at(file, pawn_rank),
                    Some(Piece::new(PieceKind::Pawn, team)),
                );
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            config: RulesConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Deep copy for speculative play; mutations to the copy never reach `self`.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }

    /// Occupied squares and their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one team, row-major
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.team == team)
    }

    /// Locate `team`'s king by scanning the board.
    #[must_use]
    pub fn find_king(&self, team: Team) -> Option<Square> {
        self.pieces_of(team)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Board as ASCII, rank 0 first; `Plus` pieces uppercase.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in &self.squares {
            for cell in rank {
                match cell {
                    Some(p) => out.push_str(&p.to_string()),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }
}
