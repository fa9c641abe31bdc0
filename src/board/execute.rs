//! Move execution and special-move resolution.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::movegen::Mode;
use super::promotion::{AlwaysQueen, PromotionChooser};
use super::{Board, MoveError, Piece, PieceKind, SpecialMove, Square};

/// What an executed move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The mover as it now stands on `to` (promoted kind, moved flag set)
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
}

impl Board {
    /// Execute a move, promoting to a queen if a pawn reaches its far rank.
    pub fn execute_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.execute_move_with(from, to, &mut AlwaysQueen)
    }

    /// Execute a move, asking `chooser` for the kind of a promoting pawn.
    ///
    /// Fails without touching the board when `from` is empty, `to` is not a
    /// legal destination, or the chooser returns a kind a pawn cannot become.
    pub fn execute_move_with<C>(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut C,
    ) -> Result<MoveOutcome, MoveError>
    where
        C: PromotionChooser + ?Sized,
    {
        let piece = self.piece_on(from)?;
        let moves = self.generate(from, piece, Mode::Real);
        if !moves.contains(to) {
            debug!("Not a valid move: ({from}) -> ({to})");
            return Err(MoveError::Illegal { from, to });
        }

        let special = moves.special_for(to);
        let promotion = match special {
            Some(SpecialMove::Promotion) => {
                let kind = chooser.choose(to);
                if !kind.is_promotion_target() {
                    return Err(MoveError::InvalidPromotion { kind });
                }
                debug!("promoting on ({to}) to {kind:?}");
                Some(kind)
            }
            Some(SpecialMove::Castle { rook_from, rook_to }) => {
                debug!("castling ({from}) -> ({to}), rook ({rook_from}) -> ({rook_to})");
                None
            }
            None => None,
        };

        let outcome = self.apply(from, to, piece, special, promotion, Mode::Real);
        trace!("moved {} ({from}) -> ({to})", outcome.piece);
        Ok(outcome)
    }

    /// Relocate `mover` from `from` to `to`, carrying out `special`.
    ///
    /// No legality check. In `Probing` mode no piece is marked as moved.
    pub(crate) fn apply(
        &mut self,
        from: Square,
        to: Square,
        mut mover: Piece,
        special: Option<SpecialMove>,
        promotion: Option<PieceKind>,
        mode: Mode,
    ) -> MoveOutcome {
        if let Some(SpecialMove::Castle { rook_from, rook_to }) = special {
            let mut rook = self.get(rook_from);
            self.set(rook_from, None);
            if let (Some(rook), Mode::Real) = (rook.as_mut(), mode) {
                rook.has_moved = true;
            }
            self.set(rook_to, rook);
        }

        if let Some(kind) = promotion {
            mover.kind = kind;
        }
        if mode == Mode::Real {
            mover.has_moved = true;
        }

        let captured = self.get(to);
        self.set(to, Some(mover));
        self.set(from, None);

        MoveOutcome {
            from,
            to,
            piece: mover,
            captured,
            special,
        }
    }
}
