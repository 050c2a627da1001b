//! Move selection for automated opponents.
//!
//! A selector sees the position read-only together with its full legal move
//! list and returns one move from that list, or `None` to decline. Scoring
//! positions is left to an external [`Evaluator`].

use rand::prelude::*;

use crate::board::{Color, GameState, Move, MoveList, DEFAULT_PROMOTION};

pub trait MoveSelector {
    /// Pick one of `moves`, all legal in `state`.
    fn select(&mut self, state: &GameState, moves: &MoveList) -> Option<Move>;
}

/// Scores a position from `perspective`'s point of view; higher is better.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState, perspective: Color) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState, Color) -> i32,
{
    fn evaluate(&self, state: &GameState, perspective: Color) -> i32 {
        self(state, perspective)
    }
}

/// Promotions other than the default piece are skipped by automated movers.
fn auto_promotion(mv: &Move) -> bool {
    mv.promotion().map_or(true, |piece| piece == DEFAULT_PROMOTION)
}

/// Uniformly random legal move.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    #[must_use]
    pub fn new() -> Self {
        RandomSelector {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selection from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        RandomSelector::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, _state: &GameState, moves: &MoveList) -> Option<Move> {
        let candidates: Vec<Move> = moves.iter().copied().filter(auto_promotion).collect();
        candidates.choose(&mut self.rng).copied()
    }
}

/// Plays the move whose resulting position scores best for the mover.
/// Ties go to the earliest move in the list.
pub struct GreedySelector<E> {
    evaluator: E,
}

impl<E: Evaluator> GreedySelector<E> {
    pub fn new(evaluator: E) -> Self {
        GreedySelector { evaluator }
    }
}

impl<E: Evaluator> MoveSelector for GreedySelector<E> {
    fn select(&mut self, state: &GameState, moves: &MoveList) -> Option<Move> {
        let mover = state.side_to_move();
        let mut best: Option<(i32, Move)> = None;
        for mv in moves.iter().filter(|mv| auto_promotion(mv)) {
            let mut next = state.clone();
            next.apply(mv);
            let score = self.evaluator.evaluate(&next, mover);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, *mv));
            }
        }
        best.map(|(_, mv)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    fn material(state: &GameState, perspective: Color) -> i32 {
        state.material(perspective) - state.material(perspective.opponent())
    }

    #[test]
    fn test_random_selector_is_reproducible() {
        let state = GameState::new();
        let moves = state.legal_moves();
        let a = RandomSelector::seeded(42).select(&state, &moves);
        let b = RandomSelector::seeded(42).select(&state, &moves);
        assert_eq!(a, b);
        assert!(moves.contains(&a.unwrap()));
    }

    #[test]
    fn test_random_selector_promotes_to_queen() {
        let state = GameState::from_fen("4k3/P7/8/8/8/8/8/K7 w - - 0 1");
        let moves = state.legal_moves_from(Square(1, 0));
        let mut selector = RandomSelector::seeded(1);
        for _ in 0..16 {
            let mv = selector.select(&state, &moves).unwrap();
            assert_eq!(mv.promotion(), Some(Piece::Queen));
        }
    }

    #[test]
    fn test_empty_move_list() {
        let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let moves = state.legal_moves();
        assert!(RandomSelector::seeded(0).select(&state, &moves).is_none());
        assert!(GreedySelector::new(material).select(&state, &moves).is_none());
    }

    #[test]
    fn test_greedy_takes_the_queen() {
        let state = GameState::from_fen("4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1");
        let moves = state.legal_moves();
        let mv = GreedySelector::new(material).select(&state, &moves).unwrap();
        assert_eq!(mv.from, Square(5, 2));
        assert_eq!(mv.to, Square(3, 3));
        assert_eq!(mv.captured, Some(Piece::Queen));
    }
}
