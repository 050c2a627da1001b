//! Chess board representation and rules.
//!
//! An 8x8 grid of optional pieces plus the side to move, en passant record,
//! castling rights and move counters. Supports full move legality including
//! castling, en passant and promotion, and check/checkmate/stalemate detection.
//!
//! # Example
//! ```
//! use chess_core::board::GameState;
//!
//! let state = GameState::new();
//! let moves = state.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::is_attacked;
pub use builder::GameStateBuilder;
pub use error::{MoveError, MoveParseError, PositionError, SquareError};
pub use fen::parse_move;
pub use make_move::Applied;
pub use state::{Board, EnPassant, GameState};
pub use status::Status;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square, Targets,
    DEFAULT_PROMOTION,
};

pub(crate) use types::PROMOTION_PIECES;
