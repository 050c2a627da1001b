//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - classified moves
//! - `Targets` - destination squares of a single piece
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, Targets};
pub use piece::{Color, Piece, DEFAULT_PROMOTION};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
