//! Depth-limited minimax without pruning.

use chess_core::{Color, Move, Position, RulesEngine};
use tracing::warn;

use crate::eval::evaluate;
use crate::{Score, DRAW_SCORE, FAULT_SCORE, MATE_SCORE};

/// Diagnostics from one or more `score` calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Successor positions generated
    pub nodes: u64,
}

/// Minimax scorer bound to one rules engine and one engine side.
pub struct MoveSearch<'r, R: RulesEngine + ?Sized> {
    rules: &'r R,
    engine_side: Color,
    nodes: u64,
}

impl<'r, R: RulesEngine + ?Sized> MoveSearch<'r, R> {
    pub fn new(rules: &'r R, engine_side: Color) -> Self {
        Self {
            rules,
            engine_side,
            nodes: 0,
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats { nodes: self.nodes }
    }

    /// Scores `mv` played in `pos`, looking `depth` further plies ahead.
    ///
    /// Terminal results are checked before the depth cutoff, so a mate or
    /// draw is recognized at every depth. A mate scores `MATE_SCORE` less the
    /// number of plies before it, so mating with `mv` itself outranks any
    /// slower mate. `pos` is never modified; each ply works on the successor
    /// the rules engine hands back.
    pub fn score(&mut self, mv: &Move, depth: u8, pos: &Position) -> Score {
        self.score_at(mv, depth, 0, pos)
    }

    fn score_at(&mut self, mv: &Move, depth: u8, ply: u8, pos: &Position) -> Score {
        let next = match self.rules.apply_move(pos, mv) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, mv = %mv.uci(), "rules engine rejected a listed move");
                return if self.rules.side_to_move(pos) == self.engine_side {
                    -FAULT_SCORE
                } else {
                    FAULT_SCORE
                };
            }
        };
        self.nodes += 1;

        let engine_to_move = self.rules.side_to_move(&next) == self.engine_side;

        if self.rules.is_checkmate(&next) {
            let mate = MATE_SCORE - Score::from(ply);
            return if engine_to_move { -mate } else { mate };
        }
        if self.rules.is_draw(&next) {
            return DRAW_SCORE;
        }
        if depth == 0 {
            return evaluate(self.rules, &next, self.engine_side);
        }

        let replies = self.rules.legal_moves(&next, None);
        if replies.is_empty() {
            return evaluate(self.rules, &next, self.engine_side);
        }

        let scores = replies.iter().map(|reply| self.score_at(reply, depth - 1, ply + 1, &next));
        if engine_to_move {
            scores.fold(Score::NEG_INFINITY, Score::max)
        } else {
            scores.fold(Score::INFINITY, Score::min)
        }
    }
}

/// One-shot form of [`MoveSearch::score`].
pub fn search_score<R: RulesEngine + ?Sized>(
    rules: &R,
    engine_side: Color,
    mv: &Move,
    depth: u8,
    pos: &Position,
) -> Score {
    MoveSearch::new(rules, engine_side).score(mv, depth, pos)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
