//! Square attack detection.
//!
//! Works on any [`Board`], so the legality filter can ask about scratch
//! copies as easily as about the live position.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns true if any piece of `attacker` attacks `target`.
#[must_use]
pub fn is_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    board
        .pieces(attacker)
        .any(|(from, piece)| attacks(board, from, attacker, piece, target))
}

/// Does the piece standing on `from` cover `target`?
fn attacks(board: &Board, from: Square, color: Color, piece: Piece, target: Square) -> bool {
    let dr = target.0 as isize - from.0 as isize;
    let dc = target.1 as isize - from.1 as isize;
    match piece {
        Piece::Pawn => dr == color.pawn_direction() && dc.abs() == 1,
        Piece::Knight => KNIGHT_OFFSETS.contains(&(dr, dc)),
        Piece::King => dr.abs().max(dc.abs()) == 1,
        Piece::Bishop => dr.abs() == dc.abs() && ray_is_clear(board, from, dr, dc),
        Piece::Rook => (dr == 0 || dc == 0) && ray_is_clear(board, from, dr, dc),
        Piece::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && ray_is_clear(board, from, dr, dc)
        }
    }
}

/// Walks from `from` toward `from + (dr, dc)` and reports whether every
/// square strictly between is empty. A zero displacement is not a ray.
fn ray_is_clear(board: &Board, from: Square, dr: isize, dc: isize) -> bool {
    if dr == 0 && dc == 0 {
        return false;
    }
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let distance = dr.abs().max(dc.abs());
    (1..distance).all(|i| {
        from.offset(step_r * i, step_c * i)
            .is_some_and(|sq| board.is_empty(sq))
    })
}

impl Board {
    /// Returns true if `square` is attacked by any piece of `attacker_color`
    #[inline]
    #[must_use]
    pub fn is_attacked(&self, square: Square, attacker_color: Color) -> bool {
        is_attacked(self, square, attacker_color)
    }

    /// Returns true if `color`'s king is attacked. A board without that
    /// king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
