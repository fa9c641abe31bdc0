use super::super::{Board, MoveSet, Square, Team};

pub(crate) const ROOK: &[(i8, i8)] = &[(0, -1), (1, 0), (0, 1), (-1, 0)];
pub(crate) const BISHOP: &[(i8, i8)] = &[(-1, -1), (1, -1), (1, 1), (-1, 1)];
pub(crate) const QUEEN: &[(i8, i8)] = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        team: Team,
        directions: &[(i8, i8)],
        moves: &mut MoveSet,
    ) {
        for &(df, dr) in directions {
            self.trace_ray(from, team, df, dr, moves);
        }
    }

    /// Walk outward until the board edge or the first occupied square, which
    /// is included only when it holds an enemy piece.
    fn trace_ray(&self, from: Square, team: Team, df: i8, dr: i8, moves: &mut MoveSet) {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            match self.get(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant.is_enemy_of(team) {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
