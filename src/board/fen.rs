use std::str::FromStr;

use super::error::{MoveParseError, PositionError};
use super::{CastleSide, CastlingRights, Color, GameState, Piece, Square};

impl GameState {
    /// Parse a position string.
    ///
    /// The en passant field is validated but not restored: a decoded
    /// position never offers an en passant capture.
    pub fn try_from_fen(fen: &str) -> Result<Self, PositionError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(PositionError::TooFewFields { found: parts.len() });
        }

        let mut state = GameState::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(PositionError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(PositionError::WrongRankWidth {
                        rank: row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                state.board.put(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(PositionError::WrongRankWidth {
                    rank: row,
                    files: col,
                });
            }
        }

        state.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PositionError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        state.castling = parse_castling(parts[2])?;

        if parts[3] != "-" {
            let valid = parts[3]
                .parse::<Square>()
                .is_ok_and(|sq| sq.0 == 2 || sq.0 == 5);
            if !valid {
                return Err(PositionError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        }

        if let Some(field) = parts.get(4) {
            state.halfmove_clock = parse_counter(field)?;
        }
        if let Some(field) = parts.get(5) {
            state.fullmove_number = parse_counter(field)?;
        }

        state.validate_kings()?;
        state.sanitize_castling();
        Ok(state)
    }

    /// Parse a position string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid position string")
    }

    /// Serialize the position: placement from rank 8 down, side to move,
    /// castling rights, en passant square, halfmove clock, fullmove number.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |ep| ep.square.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Snapshot string of the position. Same format as [`GameState::to_fen`].
    #[inline]
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_fen()
    }

    /// Rebuild a position from a snapshot string.
    #[inline]
    pub fn decode(snapshot: &str) -> Result<Self, PositionError> {
        Self::try_from_fen(snapshot)
    }
}

impl FromStr for GameState {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_fen(s)
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, PositionError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(PositionError::InvalidCastling { char: c }),
        };
        rights.set(color, side);
    }
    Ok(rights)
}

fn parse_counter(field: &str) -> Result<u32, PositionError> {
    field.parse().map_err(|_| PositionError::InvalidCounter {
        found: field.to_string(),
    })
}

/// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
///
/// Only the text is checked; whether the move is legal is up to the caller.
pub fn parse_move(text: &str) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
    let len = text.chars().count();
    if !(4..=5).contains(&len) {
        return Err(MoveParseError::InvalidLength { len });
    }
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }

    let invalid = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    let from: Square = text[0..2].parse().map_err(|_| invalid())?;
    let to: Square = text[2..4].parse().map_err(|_| invalid())?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match Piece::from_char(c) {
            Some(piece) if piece.is_promotion_choice() => Some(piece),
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
    };

    Ok((from, to, promotion))
}
