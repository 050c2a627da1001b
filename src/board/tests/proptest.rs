//! Property-based tests using proptest.

use crate::board::{Color, GameState, Piece};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position.
fn random_game(seed: u64, num_moves: usize) -> GameState {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        state.apply(&mv);
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);
        let mover = state.side_to_move();
        for mv in &state.legal_moves() {
            let mut next = state.clone();
            next.apply(mv);
            prop_assert!(!next.in_check(mover), "Legal move left king in check: {:?}", mv);
        }
    }

    /// Property: encode/decode preserves everything but the en passant record
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);
        let restored = GameState::decode(&state.encode()).unwrap();

        prop_assert_eq!(restored.board(), state.board());
        prop_assert_eq!(restored.side_to_move(), state.side_to_move());
        prop_assert_eq!(restored.castling_rights(), state.castling_rights());
        prop_assert_eq!(restored.halfmove_clock(), state.halfmove_clock());
        prop_assert_eq!(restored.fullmove_number(), state.fullmove_number());
        prop_assert!(restored.en_passant().is_none());
    }

    /// Property: each side keeps exactly one king
    #[test]
    fn prop_one_king_each(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(state.board().count(color, Piece::King), 1);
        }
    }

    /// Property: the legal destination list agrees with the legal move list
    #[test]
    fn prop_targets_match_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);
        for (from, _) in state.board().pieces(state.side_to_move()) {
            let targets = state.legal_targets(from);
            let from_moves = state.legal_moves_from(from).targets();
            prop_assert_eq!(from_moves.as_slice(), targets.as_slice());
        }
    }
}
