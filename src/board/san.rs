//! Standard Algebraic Notation (SAN) output for move annotation.
//!
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_core::board::{GameState, Square};
//!
//! let state = GameState::new();
//! let mv = state.classify(Square(6, 4), Square(4, 4), None).unwrap();
//! assert_eq!(state.move_to_san(&mv), "e4");
//! ```

use super::{GameState, Move, MoveKind, Piece};

impl GameState {
    /// Format a legal move of the side to move in Standard Algebraic Notation.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let mut san = String::new();

        match mv.kind {
            MoveKind::CastleKingside => san.push_str("O-O"),
            MoveKind::CastleQueenside => san.push_str("O-O-O"),
            _ => {
                if mv.piece == Piece::Pawn {
                    // Pawn captures include the file
                    if mv.is_capture() {
                        san.push(mv.from.file_char());
                    }
                } else {
                    san.push(mv.piece.to_char().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                    if needs_file {
                        san.push(mv.from.file_char());
                    }
                    if needs_rank {
                        san.push(mv.from.rank_char());
                    }
                }

                if mv.is_capture() {
                    san.push('x');
                }
                san.push_str(&mv.to.to_string());

                if let Some(promo) = mv.promotion() {
                    san.push('=');
                    san.push(promo.to_char().to_ascii_uppercase());
                }
            }
        }

        let mut after = self.clone();
        after.make_move(mv);
        let defender = after.side_to_move;
        if after.in_check(defender) {
            if after.has_legal_move(defender) {
                san.push('+');
            } else {
                san.push('#');
            }
        }

        san
    }

    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: &Move) -> (bool, bool) {
        let rivals: Vec<Move> = self
            .legal_moves()
            .iter()
            .copied()
            .filter(|m| m.to == mv.to && m.piece == mv.piece && m.from != mv.from)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|m| m.from.1 == mv.from.1);
        let same_rank = rivals.iter().any(|m| m.from.0 == mv.from.0);

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}
