use super::super::{Board, MoveSet, Piece, PieceKind, SpecialMove, Square, Team};
use super::Mode;

const KING_FILE: u8 = 4;

/// (rook file, step from king toward that rook); queenside first.
const CASTLE_SIDES: [(u8, i8); 2] = [(0, -1), (7, 1)];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece, moves: &mut MoveSet) {
        for dr in -1..=1 {
            for df in -1..=1 {
                if (df, dr) == (0, 0) {
                    continue;
                }
                if let Some(to) = from.offset(df, dr) {
                    self.push_if_available(to, king.team, moves);
                }
            }
        }

        if from.file() == KING_FILE && (from.rank() == 0 || from.rank() == 7) && !king.has_moved {
            self.generate_castles(from, king.team, moves);
        }
    }

    /// Castle candidates: the rook of `team` on its corner, unmoved, with every
    /// square strictly between king and rook empty. Attacks are not considered
    /// here; see `CastlingPolicy`.
    fn generate_castles(&self, from: Square, team: Team, moves: &mut MoveSet) {
        let rank = from.rank();
        for (rook_file, step) in CASTLE_SIDES {
            let rook_from = Square::at(rook_file, rank);
            let rook_ready = self.get(rook_from).is_some_and(|p| {
                p.kind == PieceKind::Rook && p.team == team && !p.has_moved
            });
            if !rook_ready {
                continue;
            }

            let (lo, hi) = if rook_file < KING_FILE {
                (rook_file + 1, KING_FILE)
            } else {
                (KING_FILE + 1, rook_file)
            };
            if !(lo..hi).all(|file| self.is_empty(Square::at(file, rank))) {
                continue;
            }

            let (Some(to), Some(rook_to)) = (from.offset(2 * step, 0), from.offset(step, 0)) else {
                continue;
            };
            moves.push_special(to, SpecialMove::Castle { rook_from, rook_to });
        }
    }

    /// True if the king is neither attacked on `from` nor on the square it
    /// passes over on the way to `to`.
    pub(crate) fn castle_transit_safe(&self, from: Square, king: Piece, to: Square) -> bool {
        if self.is_in_check(king.team) {
            return false;
        }
        let step = if to.file() > from.file() { 1 } else { -1 };
        let Some(transit) = from.offset(step, 0) else {
            return false;
        };
        let mut probe = self.snapshot();
        probe.apply(from, transit, king, None, None, Mode::Probing);
        !probe.is_in_check(king.team)
    }

    /// Whether `team`'s king is reachable by any enemy piece.
    ///
    /// Enemy reach is computed without the safety filter, so this never
    /// recurses into legality. A board without a king for `team` is never
    /// in check.
    pub fn is_in_check(&self, team: Team) -> bool {
        match self.find_king(team) {
            Some(king_sq) => self.is_attacked_by(king_sq, team.opponent()),
            None => false,
        }
    }

    /// Whether any piece of `attacker` can reach `square` (pseudo-legally).
    /// Pawn pushes count as reach, so this is exact only for occupied squares.
    pub(crate) fn is_attacked_by(&self, square: Square, attacker: Team) -> bool {
        self.pieces_of(attacker)
            .any(|(from, piece)| self.generate(from, piece, Mode::Probing).contains(square))
    }
}
