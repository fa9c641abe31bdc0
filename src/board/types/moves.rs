//! Special-move descriptors and the move set returned by generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Extra board edits a move carries beyond relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    /// King's two-square move; the paired rook also relocates.
    Castle { rook_from: Square, rook_to: Square },
    /// Pawn reaching its far rank.
    Promotion,
}

/// A special descriptor bound to the move it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedMove {
    pub from: Square,
    pub to: Square,
    pub special: SpecialMove,
}

/// Destinations reachable from one origin, plus the special descriptors tied
/// to some of them. Destinations keep generation order and hold no duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSet {
    origin: Square,
    destinations: Vec<Square>,
    specials: Vec<TaggedMove>,
}

impl MoveSet {
    pub(crate) fn new(origin: Square) -> Self {
        MoveSet {
            origin,
            destinations: Vec::with_capacity(28),
            specials: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, to: Square) {
        if !self.destinations.contains(&to) {
            self.destinations.push(to);
        }
    }

    pub(crate) fn push_special(&mut self, to: Square, special: SpecialMove) {
        self.push(to);
        self.specials.push(TaggedMove {
            from: self.origin,
            to,
            special,
        });
    }

    /// Keep only destinations matching `keep`; specials on dropped squares go too.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Square) -> bool) {
        self.destinations.retain(|&to| keep(to));
        let destinations = &self.destinations;
        self.specials.retain(|m| destinations.contains(&m.to));
    }

    #[must_use]
    pub fn origin(&self) -> Square {
        self.origin
    }

    #[must_use]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    #[must_use]
    pub fn specials(&self) -> &[TaggedMove] {
        &self.specials
    }

    #[must_use]
    pub fn contains(&self, to: Square) -> bool {
        self.destinations.contains(&to)
    }

    /// The special descriptor for the move to `to`, if any
    #[must_use]
    pub fn special_for(&self, to: Square) -> Option<SpecialMove> {
        self.specials
            .iter()
            .find(|m| m.to == to)
            .map(|m| m.special)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.destinations.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates() {
        let mut set = MoveSet::new(Square::at(0, 0));
        set.push(Square::at(1, 1));
        set.push(Square::at(1, 1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_retain_drops_orphaned_specials() {
        let mut set = MoveSet::new(Square::at(4, 7));
        set.push(Square::at(5, 7));
        set.push_special(
            Square::at(6, 7),
            SpecialMove::Castle {
                rook_from: Square::at(7, 7),
                rook_to: Square::at(5, 7),
            },
        );
        assert!(set.special_for(Square::at(6, 7)).is_some());

        set.retain(|to| to != Square::at(6, 7));
        assert_eq!(set.destinations(), &[Square::at(5, 7)]);
        assert!(set.specials().is_empty());
        assert_eq!(set.special_for(Square::at(6, 7)), None);
    }
}
