//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind move generation and the legality filter
//! - `check.rs` - Check detection
//! - `special_moves.rs` - Castling, promotion and move execution
//! - `encoding.rs` - Signed-value board encoding
//! - `proptest.rs` - Property-based tests over random playouts

use super::{Board, BoardBuilder, PieceKind, Square, Team};

mod proptest;

pub(super) fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).expect("test square on board")
}

/// Kings parked in opposite corners, out of each other's way.
pub(super) fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq(7, 7), Team::Plus, PieceKind::King)
        .piece(sq(0, 0), Team::Minus, PieceKind::King)
}

pub(super) fn sorted(squares: &[Square]) -> Vec<Square> {
    let mut v = squares.to_vec();
    v.sort();
    v
}

pub(super) fn squares(pairs: &[(u8, u8)]) -> Vec<Square> {
    let mut v: Vec<Square> = pairs.iter().map(|&(f, r)| sq(f, r)).collect();
    v.sort();
    v
}

#[test]
fn test_initial_position_layout() {
    let board = Board::new();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(board.find_king(Team::Plus), Some(sq(4, 7)));
    assert_eq!(board.find_king(Team::Minus), Some(sq(4, 0)));
    assert_eq!(board.get(sq(3, 7)).map(|p| p.kind), Some(PieceKind::Queen));
    assert!(board.pieces().all(|(_, p)| !p.has_moved));
    assert_eq!(
        board.to_ascii().lines().next(),
        Some("rnbqkbnr"),
        "Minus back rank is rank 0"
    );
}

#[test]
fn test_snapshot_does_not_alias() {
    let board = Board::new();
    let mut copy = board.snapshot();
    copy.execute_move(sq(6, 7), sq(5, 5)).unwrap();

    assert_eq!(board, Board::new());
    assert!(!board.get(sq(6, 7)).unwrap().has_moved);
    assert!(copy.get(sq(5, 5)).unwrap().has_moved);
}
