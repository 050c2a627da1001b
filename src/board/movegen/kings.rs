use super::super::attacks::KING_OFFSETS;
use super::super::{CastleSide, Color, GameState, Piece, Square, Targets};

impl GameState {
    pub(crate) fn king_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        targets.extend(self.step_targets(from, color, &KING_OFFSETS));

        for side in CastleSide::BOTH {
            if self.can_castle(from, color, side) {
                targets.push(Square(from.0, side.king_to_col()));
            }
        }
    }

    /// Castling requires the right, the rook still on its corner, an empty
    /// path, and a king that neither starts on, crosses nor lands on an
    /// attacked square.
    pub(crate) fn can_castle(&self, from: Square, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        if from != Square(row, 4) || !self.castling.has(color, side) {
            return false;
        }
        if self.board.piece_at(Square(row, side.rook_from_col())) != Some((color, Piece::Rook)) {
            return false;
        }
        if side
            .between_cols()
            .iter()
            .any(|&col| !self.board.is_empty(Square(row, col)))
        {
            return false;
        }

        let opponent = color.opponent();
        [4, side.transit_col(), side.king_to_col()]
            .iter()
            .all(|&col| !self.board.is_attacked(Square(row, col), opponent))
    }
}
