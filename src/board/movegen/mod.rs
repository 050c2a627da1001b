//! Pseudo-legal generation per piece type and the legality filter on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::{
    Color, GameState, Move, MoveKind, MoveList, Piece, Square, Targets, DEFAULT_PROMOTION,
    PROMOTION_PIECES,
};

type TargetGenerator = fn(&GameState, Square, Color, &mut Targets);

/// Indexed by [`Piece::index`].
const GENERATORS: [TargetGenerator; 6] = [
    GameState::pawn_targets,
    GameState::knight_targets,
    GameState::bishop_targets,
    GameState::rook_targets,
    GameState::queen_targets,
    GameState::king_targets,
];

impl GameState {
    /// Destinations the piece on `from` could reach by its movement rules,
    /// without regard to the safety of its own king. Empty for an empty square.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Targets {
        let mut targets = Targets::new();
        if let Some((color, piece)) = self.board.piece_at(from) {
            GENERATORS[piece.index()](self, from, color, &mut targets);
        }
        targets
    }

    /// Tag a move from `from` to `to` with its capture and special kind.
    ///
    /// Does not check legality. A pawn reaching its last row promotes to
    /// `promotion`, or to the default piece when none is given.
    #[must_use]
    pub fn classify(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        let (color, piece) = self.board.piece_at(from)?;
        let mut captured = self.board.piece_on(to);

        let kind = match piece {
            Piece::Pawn if to.0 == color.promotion_row() => {
                MoveKind::Promotion(promotion.unwrap_or(DEFAULT_PROMOTION))
            }
            Piece::Pawn if from.0.abs_diff(to.0) == 2 => MoveKind::DoublePawnPush,
            Piece::Pawn if from.1 != to.1 && captured.is_none() => {
                captured = Some(Piece::Pawn);
                MoveKind::EnPassant
            }
            Piece::King if from.1.abs_diff(to.1) == 2 => {
                if to.1 > from.1 {
                    MoveKind::CastleKingside
                } else {
                    MoveKind::CastleQueenside
                }
            }
            _ => MoveKind::Normal,
        };

        Some(Move {
            from,
            to,
            color,
            piece,
            captured,
            kind,
        })
    }

    /// Pseudo-legal destinations that do not leave the mover's king attacked.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Targets {
        let mut targets = self.pseudo_legal_targets(from);
        targets.retain(|to| self.keeps_king_safe(from, to));
        targets
    }

    /// Legal moves of the piece on `from`, one per promotion choice when a
    /// pawn reaches its last row.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.push_legal_moves(from, &mut moves);
        moves
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces(self.side_to_move) {
            self.push_legal_moves(from, &mut moves);
        }
        moves
    }

    /// Whether any piece of `color` has at least one legal destination.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces(color)
            .any(|(from, _)| !self.legal_targets(from).is_empty())
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| {
                let mut next = self.clone();
                next.make_move(mv);
                next.perft(depth - 1)
            })
            .sum()
    }

    fn push_legal_moves(&self, from: Square, moves: &mut MoveList) {
        for to in &self.legal_targets(from) {
            let Some(mv) = self.classify(from, to, None) else {
                continue;
            };
            if let MoveKind::Promotion(_) = mv.kind {
                for piece in PROMOTION_PIECES {
                    moves.push(Move {
                        kind: MoveKind::Promotion(piece),
                        ..mv
                    });
                }
            } else {
                moves.push(mv);
            }
        }
    }

    /// Simulate the move on a scratch copy and look for the mover's king.
    /// A board without that king rejects the move.
    fn keeps_king_safe(&self, from: Square, to: Square) -> bool {
        let Some(mv) = self.classify(from, to, None) else {
            return false;
        };
        let mut scratch = self.clone();
        scratch.make_move(&mv);

        let safe = scratch
            .board
            .find_king(mv.color)
            .is_some_and(|king| !scratch.board.is_attacked(king, mv.color.opponent()));
        if !safe {
            trace!("rejected {mv}: leaves {} king attacked", mv.color);
        }
        safe
    }
}
