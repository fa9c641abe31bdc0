use chess_rules::board::{
    format_squares, parse_squares, BoardBuilder, MoveError, PieceKind, RulesConfig, SpecialMove,
};
use chess_rules::{Board, SharedBoard, Square, Team};

fn sq(text: &str) -> Square {
    text.parse().expect("valid square")
}

#[test]
fn opening_sequence() {
    let mut board = Board::new();
    let moves = [
        ("4,6", "4,4"),
        ("4,1", "4,3"),
        ("6,7", "5,5"),
        ("1,0", "2,2"),
        ("5,7", "2,4"),
        ("6,0", "5,2"),
    ];
    for (from, to) in moves {
        board
            .execute_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{from} -> {to}: {e}"));
    }

    // bishop and knight cleared: Plus can castle kingside
    let king_moves = board.legal_moves(sq("4,7")).unwrap();
    assert_eq!(
        king_moves.special_for(sq("6,7")),
        Some(SpecialMove::Castle {
            rook_from: sq("7,7"),
            rook_to: sq("5,7"),
        })
    );
    board.execute_move(sq("4,7"), sq("6,7")).unwrap();
    assert_eq!(board.get(sq("5,7")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(!board.is_in_check(Team::Plus));
    assert!(!board.is_in_check(Team::Minus));
}

#[test]
fn fools_mate_leaves_no_legal_moves() {
    let mut board = Board::new();
    for (from, to) in [("5,6", "5,5"), ("4,1", "4,3"), ("6,6", "6,4"), ("3,0", "7,4")] {
        board.execute_move(sq(from), sq(to)).unwrap();
    }
    assert!(board.is_in_check(Team::Plus));
    assert_eq!(board.legal_move_count(Team::Plus), 0);
    assert!(board.legal_move_count(Team::Minus) > 0);
}

#[test]
fn illegal_request_reports_failure() {
    let mut board = Board::new();
    let err = board.execute_move(sq("0,7"), sq("0,5")).unwrap_err();
    assert_eq!(
        err,
        MoveError::Illegal {
            from: sq("0,7"),
            to: sq("0,5")
        }
    );
    assert_eq!(board, Board::new());
}

#[test]
fn move_lists_in_text_form() {
    let board = Board::new();
    let moves = board.legal_moves(sq("6,7")).unwrap();
    let text = format_squares(moves.destinations());
    assert_eq!(text, "7,5 5,5");
    assert_eq!(parse_squares(&text).unwrap(), moves.destinations());
}

#[test]
fn shared_board_serializes_two_players() {
    let game = SharedBoard::new(Board::with_config(RulesConfig::strict()));
    let white = game.clone();
    let black = game.clone();

    white.execute_move(sq("4,6"), sq("4,4")).unwrap();
    black.execute_move(sq("4,1"), sq("4,3")).unwrap();

    let board = game.snapshot();
    assert_eq!(board.config(), RulesConfig::strict());
    assert_eq!(board.get(sq("4,4")).map(|p| p.value()), Some(6));
    assert_eq!(board.get(sq("4,3")).map(|p| p.value()), Some(-6));
}

#[test]
fn underpromotion_through_public_api() {
    let mut board = BoardBuilder::new()
        .moved_piece(sq("0,1"), Team::Plus, PieceKind::Pawn)
        .piece(sq("7,7"), Team::Plus, PieceKind::King)
        .piece(sq("7,0"), Team::Minus, PieceKind::King)
        .build();
    let outcome = board
        .execute_move_with(sq("0,1"), sq("0,0"), &mut |_: Square| PieceKind::Knight)
        .unwrap();
    assert_eq!(outcome.piece.kind, PieceKind::Knight);
    assert_eq!(board.values()[0][0], 4);
}
