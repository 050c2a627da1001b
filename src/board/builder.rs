//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing position strings.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, GameStateBuilder, Piece, Square};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.legal_moves_from(Square(1, 0)).len(), 4);
//! ```

use super::error::PositionError;
use super::{Board, CastleSide, CastlingRights, Color, GameState, Piece, Square};

/// A fluent builder for [`GameState`] values.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a builder with an empty board.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::starting(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.put(square, color, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.take(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right. Dropped at build time if the king or rook
    /// is not on its home square.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling.set(color, side);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, enforcing exactly one king per color and no
    /// capturable king.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut state = GameState::empty();
        state.board = self.board;
        state.side_to_move = self.side_to_move;
        state.castling = self.castling;
        state.halfmove_clock = self.halfmove_clock;
        state.fullmove_number = self.fullmove_number;
        state.validate_kings()?;
        state.sanitize_castling();
        Ok(state)
    }
}
