//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts against known results
//! - `special_moves.rs` - Castling, en passant and promotion across turns
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;
mod special_moves;
