use super::super::{Color, GameState, Piece, Square, Targets};

impl GameState {
    pub(crate) fn pawn_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        let dir = color.pawn_direction();
        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.board.is_empty(forward) {
            targets.push(forward);
            if from.0 == color.pawn_start_row() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.board.is_empty(double) {
                        targets.push(double);
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(diagonal) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(diagonal) {
                Some((target_color, _)) if target_color != color => targets.push(diagonal),
                Some(_) => {}
                None if self.en_passant_capturable(diagonal, color) => targets.push(diagonal),
                None => {}
            }
        }
    }

    /// An empty diagonal square is an en passant destination when it is the
    /// square an opposing pawn just passed over and that pawn is still there.
    fn en_passant_capturable(&self, diagonal: Square, color: Color) -> bool {
        self.en_passant.is_some_and(|ep| {
            ep.color == color.opponent()
                && ep.square == diagonal
                && self.board.piece_at(ep.pawn_square()) == Some((ep.color, Piece::Pawn))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{GameState, Square};

    fn targets(fen: &str, from: &str) -> Vec<String> {
        let state = GameState::from_fen(fen);
        let from: Square = from.parse().unwrap();
        state
            .pseudo_legal_targets(from)
            .iter()
            .map(|sq| sq.to_string())
            .collect()
    }

    #[test]
    fn test_single_and_double_step_from_start() {
        let moves = targets(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "e2",
        );
        assert_eq!(moves, vec!["e3", "e4"]);
    }

    #[test]
    fn test_blocked_pawn_has_no_advance() {
        let moves = targets("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn test_double_step_needs_both_squares_empty() {
        let moves = targets("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves, vec!["e3"]);
    }

    #[test]
    fn test_diagonal_capture_only_of_opponent() {
        let moves = targets("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves, vec!["e3", "e4", "d3"]);
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let moves = targets(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
            "d7",
        );
        assert_eq!(moves, vec!["d6", "d5"]);
    }
}
