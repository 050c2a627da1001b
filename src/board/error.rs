//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for position string decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Position string has too few fields (needs at least 4)
    TooFewFields { found: usize },
    /// Placement field does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A rank describes more or fewer than eight files
    WrongRankWidth { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    ExtraKing { color: Color, count: usize },
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooFewFields { found } => {
                write!(f, "Position must have at least 4 fields, found {found}")
            }
            PositionError::WrongRankCount { found } => {
                write!(f, "Placement must describe 8 ranks, found {found}")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            PositionError::WrongRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            PositionError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PositionError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in position")
            }
            PositionError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            PositionError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            PositionError::MissingKing { color } => {
                write!(f, "Position has no {color} king")
            }
            PositionError::ExtraKing { color, count } => {
                write!(f, "Position has {count} {color} kings")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s move")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for rejected move attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move is not in the legal set for its origin square
    IllegalMove { from: Square, to: Square },
    /// A pawn reaches the last rank and no promotion piece was chosen
    AmbiguousPromotion { square: Square },
    /// Promotion to a piece that cannot be promoted to
    InvalidPromotion { piece: Piece },
    /// Moves are locked while an earlier position is being reviewed
    HistoryLocked,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move '{from}{to}'")
            }
            MoveError::AmbiguousPromotion { square } => {
                write!(f, "Promotion on {square} needs a piece choice")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            MoveError::HistoryLocked => {
                write!(f, "Moves are locked while reviewing history")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for coordinate move text ("e2e4", "e7e8q")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_error_too_few_fields() {
        let err = PositionError::TooFewFields { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_position_error_invalid_piece() {
        let err = PositionError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_position_error_missing_king() {
        let err = PositionError::MissingKing {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "Position has no Black king");
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::IllegalMove {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_ambiguous_promotion() {
        let err = MoveError::AmbiguousPromotion {
            square: Square(0, 0),
        };
        assert!(err.to_string().contains("a8"));
    }

    #[test]
    fn test_move_parse_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = PositionError::InvalidCastling { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
