//! Game facade: the single mutation entry point for a running game.
//!
//! Wraps a [`GameState`] with move validation, SAN annotation, a snapshot
//! history with review navigation, and the hook for an automated opponent.
//!
//! # Example
//! ```
//! use chess_core::board::{Square, Status};
//! use chess_core::game::Game;
//!
//! let mut game = Game::new();
//! let report = game.attempt_move(Square(6, 4), Square(4, 4), None).unwrap();
//! assert_eq!(report.san, "e4");
//! assert_eq!(report.status, Status::Ongoing);
//! ```

mod history;

pub use history::{History, HistoryEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, info};

use crate::board::{
    Color, GameState, Move, MoveError, MoveKind, MoveList, Piece, PositionError, Square, Status,
    Targets,
};
use crate::selector::MoveSelector;

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveReport {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub san: String,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    history: History,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_state(GameState::new())
    }

    /// A new game starting from `state`, with an empty history.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let history = History::new(state.encode());
        Game { state, history }
    }

    /// A new game from a position string.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        GameState::try_from_fen(fen).map(Game::from_state)
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    /// True while an earlier position is on display.
    #[inline]
    #[must_use]
    pub fn is_reviewing(&self) -> bool {
        !self.history.is_at_latest()
    }

    /// Legal destinations for the piece on `square`. Empty when the square
    /// does not hold a piece of the side to move or history is under review.
    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> Targets {
        if self.is_reviewing() || self.state.board().color_on(square) != Some(self.side_to_move()) {
            return Targets::default();
        }
        self.state.legal_targets(square)
    }

    /// Every legal move of the side to move, one per promotion choice.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_reviewing() {
            return MoveList::default();
        }
        self.state.legal_moves()
    }

    /// Play a move on behalf of a human.
    ///
    /// A pawn reaching its last row needs an explicit `promotion`; there is
    /// no silent default here. On error the game is unchanged.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveReport, MoveError> {
        if self.is_reviewing() {
            return Err(MoveError::HistoryLocked);
        }
        if let Some(piece) = promotion {
            if !piece.is_promotion_choice() {
                return Err(MoveError::InvalidPromotion { piece });
            }
        }
        if !self.legal_moves_for(from).contains(to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        let mv = self
            .state
            .classify(from, to, promotion)
            .ok_or(MoveError::IllegalMove { from, to })?;
        if mv.promotion().is_some() && promotion.is_none() {
            return Err(MoveError::AmbiguousPromotion { square: to });
        }
        Ok(self.commit(mv))
    }

    /// Ask `selector` for a move and play it.
    ///
    /// Returns `Ok(None)` when there is nothing to play or the selector
    /// declines. A move outside the legal set is rejected.
    pub fn play_selected(
        &mut self,
        selector: &mut dyn MoveSelector,
    ) -> Result<Option<MoveReport>, MoveError> {
        if self.is_reviewing() {
            return Err(MoveError::HistoryLocked);
        }
        let moves = self.state.legal_moves();
        if moves.is_empty() {
            return Ok(None);
        }
        let Some(mv) = selector.select(&self.state, &moves) else {
            debug!("selector declined to move");
            return Ok(None);
        };
        if !moves.contains(&mv) {
            return Err(MoveError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(Some(self.commit(mv)))
    }

    fn commit(&mut self, mv: Move) -> MoveReport {
        let san = self.state.move_to_san(&mv);
        let fullmove_number = self.state.fullmove_number();
        let applied = self.state.apply(&mv);
        let status = self.state.status();

        self.history.record(
            HistoryEntry {
                ply: self.history.len() + 1,
                fullmove_number,
                color: mv.color,
                san: san.clone(),
                mv,
                captured: applied.captured,
            },
            self.state.encode(),
        );

        match status {
            Status::Checkmate => info!("{san}: checkmate, {} wins", mv.color),
            Status::Stalemate => info!("{san}: stalemate"),
            _ => {}
        }

        MoveReport {
            mv,
            captured: applied.captured,
            kind: applied.kind,
            san,
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Position string of the position on display.
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.state.encode()
    }

    /// Replace the game with the position in `snapshot`, starting a fresh
    /// history. En passant rights are not restored. On error nothing changes.
    pub fn restore(&mut self, snapshot: &str) -> Result<(), PositionError> {
        let state = GameState::decode(snapshot)?;
        debug!("restored position {snapshot}");
        *self = Game::from_state(state);
        Ok(())
    }

    /// Show the starting position.
    pub fn first(&mut self) -> bool {
        self.goto(0)
    }

    /// Step one position back.
    pub fn back(&mut self) -> bool {
        match self.history.cursor().checked_sub(1) {
            Some(index) => self.goto(index),
            None => false,
        }
    }

    /// Step one position forward.
    pub fn forward(&mut self) -> bool {
        self.goto(self.history.cursor() + 1)
    }

    /// Return to the latest position, unlocking moves.
    pub fn last(&mut self) -> bool {
        self.goto(self.history.last_index())
    }

    /// Show the position after `index` half-moves. Returns false if the
    /// index is out of range or already on display.
    pub fn goto(&mut self, index: usize) -> bool {
        let Some(snapshot) = self.history.seek(index) else {
            return false;
        };
        self.state = GameState::decode(snapshot).expect("recorded snapshots always decode");
        debug!("navigated to position {index}");
        true
    }

    /// Pieces `color` has captured up to the position on display.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.history.captured_by(color)
    }

    /// White's material minus Black's, in centipawns.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.state.material(Color::White) - self.state.material(Color::Black)
    }
}
