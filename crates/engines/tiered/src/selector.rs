//! Difficulty-tiered move selection.
//!
//! The selector is synchronous and owns no state between calls; randomness
//! comes from the caller so games can be replayed from a seed.

use chess_core::{Color, Move, Position, RulesEngine};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::eval::piece_value;
use crate::search::MoveSearch;
use crate::tier::{Strategy, Tier};
use crate::Score;

/// Why no move was produced. These are expected outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Declined {
    #[error("it is not the engine's turn")]
    NotEngineTurn,
    #[error("the game is already over")]
    GameOver,
    #[error("no legal moves")]
    NoLegalMoves,
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub mv: Move,
    /// Score of `mv` before any blunder replaced it.
    pub score: Score,
    /// True when Easy's random pick overrode the ranking.
    pub blundered: bool,
    pub candidates: usize,
    pub nodes: u64,
}

pub struct Selector<'r, R: RulesEngine + ?Sized> {
    rules: &'r R,
    tier: Tier,
    side: Color,
}

impl<'r, R: RulesEngine + ?Sized> Selector<'r, R> {
    pub fn new(rules: &'r R, tier: Tier, side: Color) -> Self {
        Self { rules, tier, side }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn side(&self) -> Color {
        self.side
    }

    /// Returns the legal moves when the engine may move in `pos`.
    pub fn validate(&self, pos: &Position) -> Result<Vec<Move>, Declined> {
        let rules = self.rules;
        if rules.side_to_move(pos) != self.side {
            return Err(Declined::NotEngineTurn);
        }
        if rules.is_checkmate(pos) || rules.is_draw(pos) || rules.is_stalemate(pos) {
            return Err(Declined::GameOver);
        }
        let moves = rules.legal_moves(pos, None);
        if moves.is_empty() {
            return Err(Declined::NoLegalMoves);
        }
        Ok(moves)
    }

    /// Picks a move for the engine side.
    pub fn choose<G: Rng>(&self, pos: &Position, rng: &mut G) -> Result<Selection, Declined> {
        let moves = self.validate(pos).inspect_err(|reason| {
            debug!(tier = %self.tier, side = %self.side, %reason, "selection declined");
        })?;
        let profile = self.tier.profile();
        let mut search = MoveSearch::new(self.rules, self.side);

        let mut best: Option<(usize, Score)> = None;
        for (i, mv) in moves.iter().enumerate() {
            let score = match profile.strategy {
                Strategy::Heuristic => {
                    let noise = if profile.jitter > 0.0 {
                        rng.gen_range(0.0..profile.jitter)
                    } else {
                        0.0
                    };
                    quick_score(mv) + noise
                }
                Strategy::Search { depth } => search.score(mv, depth, pos),
            };
            // Strictly greater: the earliest move keeps a tie.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        let Some((index, score)) = best else {
            return Err(Declined::NoLegalMoves);
        };
        let mut mv = &moves[index];
        let mut blundered = false;
        if profile.blunder_chance > 0.0 && rng.gen_bool(profile.blunder_chance) {
            if let Some(random) = moves.choose(rng) {
                mv = random;
                blundered = true;
            }
        }

        let nodes = search.stats().nodes;
        debug!(
            tier = %self.tier,
            side = %self.side,
            mv = %mv.san,
            score,
            blundered,
            candidates = moves.len(),
            nodes,
            "move selected"
        );

        Ok(Selection {
            mv: mv.clone(),
            score,
            blundered,
            candidates: moves.len(),
            nodes,
        })
    }
}

/// Heuristic score of a move, from its metadata alone.
pub(crate) fn quick_score(mv: &Move) -> Score {
    let mut score = 0.0;
    if let Some(captured) = mv.captured {
        score += piece_value(captured) * 10.0;
    }
    if mv.promo.is_some() {
        score += 50.0;
    }
    if mv.san.contains('+') {
        score += 10.0;
    }
    if mv.san.contains('#') {
        score += 100.0;
    }
    if mv.is_castle() {
        score += 30.0;
    }
    score
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
