mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::{
    Board, CastlingPolicy, MoveError, MoveSet, Piece, PieceKind, SpecialMove, Square, Team,
};

/// Whether generation and execution act on the real game or on a probe.
///
/// `Real` generation applies the own-king-safety filter and `Real` execution
/// records side effects (move flags, promotion choice). `Probing` does
/// neither: it serves check detection and the speculative copies the
/// safety filter plays moves on, and never recurses into the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Real,
    Probing,
}

impl Board {
    /// Destinations for the piece on `origin`, with special-move descriptors.
    ///
    /// `Mode::Real` yields fully legal moves; `Mode::Probing` yields
    /// pseudo-legal ones.
    pub fn moves(&self, origin: Square, mode: Mode) -> Result<MoveSet, MoveError> {
        let piece = self.piece_on(origin)?;
        Ok(self.generate(origin, piece, mode))
    }

    pub fn legal_moves(&self, origin: Square) -> Result<MoveSet, MoveError> {
        self.moves(origin, Mode::Real)
    }

    /// Moves obeying shape and occupancy only, without the own-king-safety filter.
    pub fn pseudo_legal_moves(&self, origin: Square) -> Result<MoveSet, MoveError> {
        self.moves(origin, Mode::Probing)
    }

    /// Legal move sets for every piece of `team` that can move, row-major by origin.
    pub fn legal_moves_for_team(&self, team: Team) -> Vec<MoveSet> {
        self.pieces_of(team)
            .map(|(from, piece)| self.generate(from, piece, Mode::Real))
            .filter(|moves| !moves.is_empty())
            .collect()
    }

    /// Number of legal moves available to `team`.
    pub fn legal_move_count(&self, team: Team) -> usize {
        self.legal_moves_for_team(team).iter().map(MoveSet::len).sum()
    }

    pub(crate) fn piece_on(&self, square: Square) -> Result<Piece, MoveError> {
        self.get(square).ok_or(MoveError::EmptySquare { square })
    }

    pub(crate) fn generate(&self, from: Square, piece: Piece, mode: Mode) -> MoveSet {
        let mut moves = MoveSet::new(from);
        let team = piece.team;
        match piece.kind {
            PieceKind::King => self.generate_king_moves(from, piece, &mut moves),
            PieceKind::Queen => self.generate_slider_moves(from, team, sliders::QUEEN, &mut moves),
            PieceKind::Bishop => self.generate_slider_moves(from, team, sliders::BISHOP, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(from, team, &mut moves),
            PieceKind::Rook => self.generate_slider_moves(from, team, sliders::ROOK, &mut moves),
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, &mut moves),
        }

        if mode == Mode::Real {
            self.retain_king_safe(from, piece, &mut moves);
        }
        moves
    }

    /// Push `to` unless a piece of `team` stands on it.
    #[inline]
    pub(crate) fn push_if_available(&self, to: Square, team: Team, moves: &mut MoveSet) {
        if self.get(to).map_or(true, |p| p.is_enemy_of(team)) {
            moves.push(to);
        }
    }

    /// Legality filter: play each candidate on a copy and drop those that
    /// leave the mover's own king attacked.
    fn retain_king_safe(&self, from: Square, piece: Piece, moves: &mut MoveSet) {
        let specials: Vec<_> = moves.specials().to_vec();
        moves.retain(|to| {
            let special = specials.iter().find(|m| m.to == to).map(|m| m.special);
            if let Some(SpecialMove::Castle { .. }) = special {
                if self.config.castling == CastlingPolicy::Strict
                    && !self.castle_transit_safe(from, piece, to)
                {
                    trace!("castle ({from}) -> ({to}) crosses an attacked square");
                    return false;
                }
            }

            let mut probe = self.snapshot();
            let promotion = (special == Some(SpecialMove::Promotion)).then_some(PieceKind::Queen);
            probe.apply(from, to, piece, special, promotion, Mode::Probing);
            !probe.is_in_check(piece.team)
        });
    }
}
