//! Special moves whose legality depends on state carried across turns.

use crate::board::{Color, GameState, MoveKind, Piece, Square, Status};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(state: &mut GameState, from: &str, to: &str) {
    let mv = state
        .legal_moves_from(sq(from))
        .iter()
        .copied()
        .find(|mv| mv.to == sq(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal"));
    state.apply(&mv);
}

#[test]
fn test_pawn_double_step_from_start() {
    let state = GameState::new();
    for col in 0..8 {
        let targets = state.legal_targets(Square(6, col));
        assert!(targets.contains(Square(5, col)));
        assert!(targets.contains(Square(4, col)));
        assert_eq!(targets.len(), 2);
    }
}

#[test]
fn test_blocked_pawn_has_neither_advance() {
    let state = GameState::from_fen("4k3/8/8/8/8/4b3/4P3/4K3 w - - 0 1");
    assert!(state.legal_targets(sq("e2")).is_empty());
}

#[test]
fn test_black_has_no_moves_on_whites_turn() {
    let state = GameState::new();
    assert!(state.legal_moves().iter().all(|mv| mv.color == Color::White));
    let black = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    assert_eq!(black.legal_moves().len(), 20);
}

#[test]
fn test_en_passant_available_right_after_double_step() {
    let mut state = GameState::from_fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    play(&mut state, "e2", "e4");

    let targets = state.legal_targets(sq("f4"));
    assert!(targets.contains(sq("e3")));
    let mv = state.classify(sq("f4"), sq("e3"), None).unwrap();
    assert_eq!(mv.kind, MoveKind::EnPassant);

    play(&mut state, "f4", "e3");
    assert!(state.piece_at(sq("e4")).is_none());
    assert_eq!(state.piece_at(sq("e3")), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut state = GameState::from_fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    play(&mut state, "e2", "e4");
    play(&mut state, "e8", "d8");
    play(&mut state, "e1", "d1");
    assert!(!state.legal_targets(sq("f4")).contains(sq("e3")));
}

#[test]
fn test_no_en_passant_after_other_move() {
    let mut state = GameState::from_fen("4k3/8/8/8/4Pp2/8/8/4K3 w - - 0 1");
    play(&mut state, "e1", "d1");
    assert!(!state.legal_targets(sq("f4")).contains(sq("e3")));
}

#[test]
fn test_en_passant_rejected_when_it_exposes_the_king() {
    // Both pawns leave the fourth rank, opening the rook onto the king.
    let mut state = GameState::from_fen("8/8/8/8/k4p1R/8/4P3/4K3 w - - 0 1");
    play(&mut state, "e2", "e4");
    assert!(state.pseudo_legal_targets(sq("f4")).contains(sq("e3")));
    assert!(!state.legal_targets(sq("f4")).contains(sq("e3")));
}

#[test]
fn test_castling_present_when_path_clear_and_safe() {
    let state = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    let targets = state.legal_targets(sq("e1"));
    assert!(targets.contains(sq("g1")));
    assert!(targets.contains(sq("c1")));
}

#[test]
fn test_castling_absent_when_path_attacked() {
    // Knight on e3 covers d1 and f1 without giving check.
    let state = GameState::from_fen("r3k2r/pppppppp/8/8/8/4n3/PPP2PPP/R3K2R w KQkq - 0 1");
    assert!(!state.in_check(Color::White));
    let targets = state.legal_targets(sq("e1"));
    assert!(!targets.contains(sq("g1")));
    assert!(!targets.contains(sq("c1")));
}

#[test]
fn test_castling_lost_after_rook_round_trip() {
    let mut state = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    play(&mut state, "h1", "g1");
    play(&mut state, "h8", "g8");
    play(&mut state, "g1", "h1");
    play(&mut state, "g8", "h8");
    assert!(!state.legal_targets(sq("e1")).contains(sq("g1")));
    assert!(state.legal_targets(sq("e1")).contains(sq("c1")));
}

#[test]
fn test_scholars_mate() {
    let mut state = GameState::new();
    play(&mut state, "e2", "e4");
    play(&mut state, "e7", "e5");
    play(&mut state, "f1", "c4");
    play(&mut state, "b8", "c6");
    play(&mut state, "d1", "h5");
    play(&mut state, "g8", "f6");
    play(&mut state, "h5", "f7");
    assert_eq!(state.status(), Status::Checkmate);
    assert!(!state.has_legal_move(Color::Black));
}

#[test]
fn test_stalemate_reported() {
    let state = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
    assert!(!state.in_check(Color::Black));
    assert_eq!(state.status(), Status::Stalemate);
}
