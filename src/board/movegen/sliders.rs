use super::super::attacks::{DIAGONALS, ORTHOGONALS};
use super::super::{Board, Color, GameState, Square, Targets};

/// Lazy walk along one direction.
///
/// Yields empty squares, then the first occupied square if it holds an
/// opponent piece, then stops.
#[derive(Clone)]
pub(crate) struct Ray<'a> {
    board: &'a Board,
    current: Square,
    step: (isize, isize),
    color: Color,
    done: bool,
}

impl<'a> Ray<'a> {
    pub(crate) fn new(board: &'a Board, from: Square, step: (isize, isize), color: Color) -> Self {
        Ray {
            board,
            current: from,
            step,
            color,
            done: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.done {
            return None;
        }
        let Some(next) = self.current.offset(self.step.0, self.step.1) else {
            self.done = true;
            return None;
        };
        self.current = next;
        match self.board.color_on(next) {
            None => Some(next),
            Some(c) => {
                self.done = true;
                (c != self.color).then_some(next)
            }
        }
    }
}

impl GameState {
    pub(crate) fn bishop_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        self.slide(from, color, &DIAGONALS, targets);
    }

    pub(crate) fn rook_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        self.slide(from, color, &ORTHOGONALS, targets);
    }

    pub(crate) fn queen_targets(&self, from: Square, color: Color, targets: &mut Targets) {
        self.slide(from, color, &ORTHOGONALS, targets);
        self.slide(from, color, &DIAGONALS, targets);
    }

    fn slide(&self, from: Square, color: Color, dirs: &[(isize, isize)], targets: &mut Targets) {
        for &step in dirs {
            targets.extend(Ray::new(&self.board, from, step, color));
        }
    }
}
