#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastleSide, CastlingRights, Color, Piece, PositionError, Square};

/// The 8x8 grid of optional pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial layout
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.put(Square(0, col), Color::Black, *piece);
            board.put(Square(7, col), Color::White, *piece);
            board.put(Square(1, col), Color::Black, Piece::Pawn);
            board.put(Square(6, col), Color::White, Piece::Pawn);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Place a piece, replacing whatever stood there
    #[inline]
    pub fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Remove and return the piece on a square
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Every occupied square with its piece, row by row from a8
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Every square holding a piece of `color`
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color).filter(|(_, p)| *p == piece).count()
    }
}

/// A pawn of `color` has just advanced two squares and may be captured
/// en passant by moving onto `square`, the square it passed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassant {
    pub square: Square,
    pub color: Color,
}

impl EnPassant {
    /// Square of the pawn that can be captured
    #[inline]
    #[must_use]
    pub fn pawn_square(self) -> Square {
        let row = self.square.0 as isize + self.color.pawn_direction();
        Square(row as usize, self.square.1)
    }
}

/// Complete state of a game in progress.
///
/// Owned exclusively by its holder; all mutation goes through
/// [`GameState::apply`]. Cloning is cheap and is how the legality filter
/// simulates moves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) castling: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// The standard initial position, White to move
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            side_to_move: Color::White,
            en_passant: None,
            castling: CastlingRights::all(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn empty() -> Self {
        GameState {
            board: Board::empty(),
            side_to_move: Color::White,
            en_passant: None,
            castling: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Sum of material values of one side's pieces
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.board.pieces(color).map(|(_, piece)| piece.value()).sum()
    }

    /// Exactly one king per color, and the side that is not to move must not
    /// be in check: otherwise its king would be capturable.
    pub(crate) fn validate_kings(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            match self.board.count(color, Piece::King) {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                count => return Err(PositionError::ExtraKing { color, count }),
            }
        }
        let waiting = self.side_to_move.opponent();
        if self.board.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }

    /// Drop castling rights the placement cannot support: the king must be
    /// on its home square and the rook on its corner.
    pub(crate) fn sanitize_castling(&mut self) {
        for color in Color::BOTH {
            let row = color.back_row();
            if self.board.piece_at(Square(row, 4)) != Some((color, Piece::King)) {
                self.castling.remove_color(color);
                continue;
            }
            for side in CastleSide::BOTH {
                let corner = Square(row, side.rook_from_col());
                if self.board.piece_at(corner) != Some((color, Piece::Rook)) {
                    self.castling.remove(color, side);
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
