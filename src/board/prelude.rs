//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let state = GameState::new();
//! assert_eq!(state.status(), Status::Ongoing);
//! ```

pub use super::{
    Color, GameState, GameStateBuilder, Move, MoveError, MoveKind, MoveList, MoveParseError,
    Piece, PositionError, Square, SquareError, Status, Targets,
};
