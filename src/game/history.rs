//! Played moves and the position snapshots taken after each of them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Piece};

/// One half-move as it appears on a score sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// 1-based half-move index
    pub ply: usize,
    pub fullmove_number: u32,
    pub color: Color,
    pub san: String,
    pub mv: Move,
    pub captured: Option<Piece>,
}

/// Move list plus snapshots with a review cursor.
///
/// `snapshots[0]` is the starting position and `snapshots[i]` the position
/// after `entries[i - 1]`. The cursor names the snapshot on display; new
/// moves are only accepted while it sits on the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct History {
    entries: Vec<HistoryEntry>,
    snapshots: Vec<String>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: String) -> Self {
        History {
            entries: Vec::new(),
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    pub(crate) fn record(&mut self, entry: HistoryEntry, snapshot: String) {
        debug_assert!(self.is_at_latest());
        self.entries.push(entry);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Move the cursor to `index`, returning the snapshot to display if the
    /// cursor actually moved.
    pub(crate) fn seek(&mut self, index: usize) -> Option<&str> {
        if index >= self.snapshots.len() || index == self.cursor {
            return None;
        }
        self.cursor = index;
        Some(&self.snapshots[index])
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Pieces `color` has taken in the moves up to the cursor.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.entries[..self.cursor]
            .iter()
            .filter(|entry| entry.color == color)
            .filter_map(|entry| entry.captured)
            .collect()
    }

    /// Score sheet lines: "1. e4 e5", "2. Nf3".
    #[must_use]
    pub fn score_sheet(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut white_open = false;
        for entry in &self.entries {
            match entry.color {
                Color::White => {
                    lines.push(format!("{}. {}", entry.fullmove_number, entry.san));
                    white_open = true;
                }
                Color::Black => {
                    match lines.last_mut() {
                        Some(line) if white_open => {
                            line.push(' ');
                            line.push_str(&entry.san);
                        }
                        _ => lines.push(format!("{}... {}", entry.fullmove_number, entry.san)),
                    }
                    white_open = false;
                }
            }
        }
        lines
    }
}
