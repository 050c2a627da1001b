//! Table-driven checks over the positions in `tests/data/positions.json`.

use serde::Deserialize;

use chess_core::board::{GameState, Status};
use chess_core::game::Game;

#[derive(Debug, Deserialize)]
struct PositionCase {
    name: String,
    fen: String,
    status: String,
    perft: Vec<u64>,
}

fn load_cases() -> Vec<PositionCase> {
    let raw = include_str!("data/positions.json");
    serde_json::from_str(raw).expect("positions.json must parse")
}

#[test]
fn status_matches_table() {
    for case in load_cases() {
        let state = GameState::from_fen(&case.fen);
        assert_eq!(
            state.status().to_string(),
            case.status,
            "status mismatch for {}",
            case.name
        );
    }
}

#[test]
fn perft_matches_table() {
    for case in load_cases() {
        let state = GameState::from_fen(&case.fen);
        for (depth, &expected) in case.perft.iter().enumerate() {
            assert_eq!(
                state.perft(depth as u32),
                expected,
                "perft({depth}) mismatch for {}",
                case.name
            );
        }
    }
}

#[test]
fn snapshots_round_trip_through_game() {
    for case in load_cases() {
        let mut game = Game::from_fen(&case.fen).expect("table positions are valid");
        let snapshot = game.snapshot();
        game.restore(&snapshot).expect("own snapshot must restore");
        assert_eq!(game.snapshot(), snapshot, "round trip failed for {}", case.name);
    }
}

#[test]
fn finished_games_have_no_moves() {
    for case in load_cases() {
        let game = Game::from_fen(&case.fen).expect("table positions are valid");
        let over = matches!(game.status(), Status::Checkmate | Status::Stalemate);
        assert_eq!(over, game.legal_moves().is_empty(), "{}", case.name);
    }
}

#[cfg(feature = "serde")]
#[test]
fn game_state_serializes_with_serde() {
    for case in load_cases() {
        let state = GameState::from_fen(&case.fen);
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state, "{}", case.name);
    }
}
