use super::super::{Board, MoveSet, Square, Team};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
    (2, -1),
    (-2, -1),
    (2, 1),
    (-2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, team: Team, moves: &mut MoveSet) {
        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(df, dr) {
                self.push_if_available(to, team, moves);
            }
        }
    }
}
