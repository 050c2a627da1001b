pub mod board;
pub mod game;
pub mod protocol;
pub mod selector;

pub use board::{Color, GameState, Move, Piece, Square, Status};
pub use game::Game;
