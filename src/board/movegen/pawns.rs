use super::super::{Board, MoveSet, Piece, SpecialMove, Square, Team};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut MoveSet) {
        let dir = pawn.team.pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if self.is_empty(one) {
                push_pawn_move(one, pawn.team, moves);
                if !pawn.has_moved {
                    if let Some(two) = from.offset(0, 2 * dir) {
                        if self.is_empty(two) {
                            push_pawn_move(two, pawn.team, moves);
                        }
                    }
                }
            }
        }

        // captures only onto enemy-occupied squares
        for df in [1, -1] {
            if let Some(target) = from.offset(df, dir) {
                if self.get(target).is_some_and(|p| p.is_enemy_of(pawn.team)) {
                    push_pawn_move(target, pawn.team, moves);
                }
            }
        }
    }
}

fn push_pawn_move(to: Square, team: Team, moves: &mut MoveSet) {
    if to.rank() == team.promotion_rank() {
        moves.push_special(to, SpecialMove::Promotion);
    } else {
        moves.push(to);
    }
}
