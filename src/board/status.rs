//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState};

/// Outcome of evaluating the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    /// True for checkmate and stalemate
    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ongoing => "ongoing",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

impl GameState {
    /// Returns true if `color`'s king is attacked
    #[inline]
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        let color = self.side_to_move;
        let check = self.in_check(color);
        let mobile = self.has_legal_move(color);
        match (check, mobile) {
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
            (true, true) => Status::Check,
            (false, true) => Status::Ongoing,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status() == Status::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == Status::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_ongoing() {
        assert_eq!(GameState::new().status(), Status::Ongoing);
    }

    #[test]
    fn test_back_rank_mate() {
        let state = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(state.in_check(Color::Black));
        assert_eq!(state.status(), Status::Checkmate);
        assert!(state.is_checkmate());
        assert!(state.status().is_game_over());
    }

    #[test]
    fn test_check_with_escape() {
        let state = GameState::from_fen("3R2k1/5pp1/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(state.status(), Status::Check);
    }

    #[test]
    fn test_stalemate() {
        let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!state.in_check(Color::Black));
        assert_eq!(state.status(), Status::Stalemate);
        assert!(state.is_stalemate());
    }
}
