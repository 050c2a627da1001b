//! Applying a classified move to a [`GameState`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::debug;

use super::state::EnPassant;
use super::{CastleSide, Color, GameState, Move, MoveKind, Piece, Square, DEFAULT_PROMOTION};

/// What an applied move left behind, for notation and history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Applied {
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl GameState {
    /// Apply a legal move of the side to move.
    ///
    /// # Panics
    ///
    /// Panics if the move does not belong to the side to move or its origin
    /// square is empty. Both indicate a caller bypassing the legality filter.
    pub fn apply(&mut self, mv: &Move) -> Applied {
        assert_eq!(
            mv.color, self.side_to_move,
            "move {mv} applied out of turn"
        );
        let applied = self.make_move(mv);
        debug!("applied {mv} ({:?})", applied.kind);
        applied
    }

    /// Mutate the position for `mv` without checking whose turn it is.
    /// The legality filter runs this on scratch copies.
    pub(crate) fn make_move(&mut self, mv: &Move) -> Applied {
        let (color, piece) = self
            .board
            .take(mv.from)
            .expect("move origin must hold a piece");

        let mut captured = None;

        if mv.is_en_passant() {
            captured = self
                .board
                .take(Square(mv.from.0, mv.to.1))
                .map(|(_, p)| p);
        }

        if let Some(side) = mv.kind.castle_side() {
            let row = color.back_row();
            if let Some((rook_color, rook)) = self.board.take(Square(row, side.rook_from_col())) {
                self.board.put(Square(row, side.rook_to_col()), rook_color, rook);
            }
        }

        if let Some((_, taken)) = self.board.take(mv.to) {
            captured = Some(taken);
        }

        let placed = if piece == Piece::Pawn && mv.to.0 == color.promotion_row() {
            mv.promotion().unwrap_or(DEFAULT_PROMOTION)
        } else {
            piece
        };
        self.board.put(mv.to, color, placed);

        self.en_passant = (piece == Piece::Pawn && mv.from.0.abs_diff(mv.to.0) == 2).then(|| {
            EnPassant {
                square: Square((mv.from.0 + mv.to.0) / 2, mv.from.1),
                color,
            }
        });

        self.update_castling(color, piece, mv.from, mv.to);

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        Applied {
            captured,
            kind: mv.kind,
        }
    }

    /// A king move forfeits both rights; anything leaving or landing on a
    /// rook corner forfeits that corner's right.
    fn update_castling(&mut self, color: Color, piece: Piece, from: Square, to: Square) {
        if piece == Piece::King {
            self.castling.remove_color(color);
        }
        for owner in Color::BOTH {
            for side in CastleSide::BOTH {
                let corner = Square(owner.back_row(), side.rook_from_col());
                if from == corner || to == corner {
                    self.castling.remove(owner, side);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{CastleSide, Color, GameState, MoveKind, Piece, Square};

    fn play(state: &mut GameState, from: &str, to: &str) {
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        let mv = state
            .legal_moves_from(from)
            .iter()
            .copied()
            .find(|mv| mv.to == to)
            .unwrap_or_else(|| panic!("{from}{to} is not legal"));
        state.apply(&mv);
    }

    #[test]
    fn test_double_step_sets_en_passant_for_one_move() {
        let mut state = GameState::new();
        play(&mut state, "e2", "e4");
        let ep = state.en_passant().unwrap();
        assert_eq!(ep.square, Square(5, 4));
        assert_eq!(ep.color, Color::White);
        assert_eq!(ep.pawn_square(), Square(4, 4));

        play(&mut state, "g8", "f6");
        assert!(state.en_passant().is_none());
    }

    #[test]
    fn test_en_passant_removes_the_passed_pawn() {
        let mut state = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        play(&mut state, "d7", "d5");
        let mv = state
            .classify("e5".parse().unwrap(), "d6".parse().unwrap(), None)
            .unwrap();
        assert_eq!(mv.kind, MoveKind::EnPassant);
        let applied = state.apply(&mv);
        assert_eq!(applied.captured, Some(Piece::Pawn));
        assert!(state.piece_at("d5".parse().unwrap()).is_none());
        assert_eq!(
            state.piece_at("d6".parse().unwrap()),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_castling_moves_the_rook() {
        let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut state, "e1", "g1");
        assert_eq!(state.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
        assert!(state.piece_at(Square(7, 7)).is_none());
        assert!(!state.castling_rights().has(Color::White, CastleSide::Kingside));
        assert!(!state.castling_rights().has(Color::White, CastleSide::Queenside));

        play(&mut state, "e8", "c8");
        assert_eq!(state.piece_at(Square(0, 3)), Some((Color::Black, Piece::Rook)));
        assert_eq!(state.piece_at(Square(0, 2)), Some((Color::Black, Piece::King)));
        assert!(state.castling_rights().is_empty());
    }

    #[test]
    fn test_rook_move_and_capture_clear_rights() {
        let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut state, "a1", "a8");
        let rights = state.castling_rights();
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let mut state = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = state
            .classify(Square(1, 0), Square(0, 0), None)
            .unwrap();
        state.apply(&mv);
        assert_eq!(state.piece_at(Square(0, 0)), Some((Color::White, Piece::Queen)));
    }

    #[test]
    fn test_underpromotion() {
        let mut state = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = state
            .classify(Square(1, 0), Square(0, 1), Some(Piece::Knight))
            .unwrap();
        let applied = state.apply(&mv);
        assert_eq!(applied.captured, Some(Piece::Rook));
        assert_eq!(applied.kind, MoveKind::Promotion(Piece::Knight));
        assert_eq!(state.piece_at(Square(0, 1)), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_counters() {
        let mut state = GameState::new();
        play(&mut state, "g1", "f3");
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 1);
        assert_eq!(state.side_to_move(), Color::Black);
        play(&mut state, "e7", "e5");
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 2);
        assert_eq!(state.side_to_move(), Color::White);
    }

    #[test]
    fn test_counters_saturate_at_their_limit() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 4294967295 4294967295");
        play(&mut state, "e8", "d8");
        assert_eq!(state.halfmove_clock(), u32::MAX);
        assert_eq!(state.fullmove_number(), u32::MAX);
        assert_eq!(
            state.to_fen(),
            "3k4/8/8/8/8/8/8/4K3 w - - 4294967295 4294967295"
        );
    }

    #[test]
    #[should_panic(expected = "out of turn")]
    fn test_apply_out_of_turn_panics() {
        let mut state = GameState::new();
        let mv = state.classify(Square(1, 4), Square(3, 4), None).unwrap();
        state.apply(&mv);
    }
}
