//! Property-based tests using proptest.

use crate::board::{Board, PieceKind, Square, Team};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves, alternating sides from `Plus`,
/// calling `check` on the board before each move.
fn random_playout(
    seed: u64,
    plies: usize,
    mut check: impl FnMut(&Board, Team) -> Result<(), TestCaseError>,
) -> Result<Board, TestCaseError> {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut team = Team::Plus;

    for _ in 0..plies {
        check(&board, team)?;
        let sets = board.legal_moves_for_team(team);
        if sets.is_empty() {
            break;
        }
        let set = &sets[rng.gen_range(0..sets.len())];
        let to = set.destinations()[rng.gen_range(0..set.len())];
        let promote_to = PieceKind::PROMOTION_TARGETS[rng.gen_range(0..4)];

        let outcome = board
            .execute_move_with(set.origin(), to, &mut |_: Square| promote_to)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(outcome.piece.has_moved);
        prop_assert!(!board.is_in_check(team), "mover left its own king in check");
        team = team.opponent();
    }
    Ok(board)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), plies in move_count_strategy()) {
        random_playout(seed, plies, |board, team| {
            for set in board.legal_moves_for_team(team) {
                for &to in set.destinations() {
                    let mut probe = board.snapshot();
                    probe.execute_move(set.origin(), to)
                        .map_err(|e| TestCaseError::fail(e.to_string()))?;
                    prop_assert!(!probe.is_in_check(team));
                }
            }
            Ok(())
        })?;
    }

    /// Property: legal moves are a subset of pseudo-legal moves
    #[test]
    fn prop_legal_subset_of_pseudo_legal(seed in seed_strategy(), plies in move_count_strategy()) {
        random_playout(seed, plies, |board, team| {
            for (from, _) in board.pieces_of(team) {
                let legal = board.legal_moves(from).unwrap();
                let pseudo = board.pseudo_legal_moves(from).unwrap();
                prop_assert!(legal.iter().all(|&to| pseudo.contains(to)));
                for special in legal.specials() {
                    prop_assert_eq!(special.from, from);
                    prop_assert!(legal.contains(special.to));
                }
            }
            Ok(())
        })?;
    }

    /// Property: pieces are never created and each side keeps exactly one king
    #[test]
    fn prop_material_never_grows(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut last_count = 32;
        let board = random_playout(seed, plies, |board, _| {
            let count = board.pieces().count();
            prop_assert!(count <= last_count);
            last_count = count;
            for team in Team::BOTH {
                let kings = board
                    .pieces_of(team)
                    .filter(|(_, p)| p.kind == PieceKind::King)
                    .count();
                prop_assert_eq!(kings, 1);
            }
            Ok(())
        })?;
        prop_assert!(board.pieces().count() <= 32);
    }

    /// Property: the text encoding restores occupancy exactly
    #[test]
    fn prop_text_encoding_restores_values(seed in seed_strategy(), plies in move_count_strategy()) {
        let board = random_playout(seed, plies, |_, _| Ok(()))?;
        let restored = Board::from_text(&board.to_text()).unwrap();
        prop_assert_eq!(restored.values(), board.values());
    }
}
