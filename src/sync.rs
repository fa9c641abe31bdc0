//! Per-game serialization of board access.
//!
//! The engine itself holds no locks. When several threads act on the same
//! game (one per connected player, say), they share a `SharedBoard`, which
//! holds the lock for the whole of each generate or execute call.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{
    Board, MoveError, MoveOutcome, MoveSet, PromotionChooser, Square, Team,
};

/// A board shared between threads, locked per call.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    pub fn legal_moves(&self, origin: Square) -> Result<MoveSet, MoveError> {
        self.0.lock().legal_moves(origin)
    }

    pub fn execute_move(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.0.lock().execute_move(from, to)
    }

    /// Execute with a promotion chooser. The chooser runs with the lock held.
    pub fn execute_move_with<C>(
        &self,
        from: Square,
        to: Square,
        chooser: &mut C,
    ) -> Result<MoveOutcome, MoveError>
    where
        C: PromotionChooser + ?Sized,
    {
        self.0.lock().execute_move_with(from, to, chooser)
    }

    #[must_use]
    pub fn is_in_check(&self, team: Team) -> bool {
        self.0.lock().is_in_check(team)
    }

    /// A copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.0.lock())
    }
}
