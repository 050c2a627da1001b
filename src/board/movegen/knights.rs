use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, GameState, Square, Targets};

impl GameState {
    pub(crate) fn knight_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        targets.extend(self.step_targets(from, color, &KNIGHT_OFFSETS));
    }

    /// Single-step destinations that are empty or hold an opponent piece.
    pub(crate) fn step_targets<'a>(
        &'a self,
        from: Square,
        color: Color,
        offsets: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Square> + 'a {
        offsets
            .iter()
            .filter_map(move |&(dr, dc)| from.offset(dr, dc))
            .filter(move |&to| self.board.color_on(to) != Some(color))
    }
}
