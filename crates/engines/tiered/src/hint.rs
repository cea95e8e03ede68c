//! Ranked move suggestions for the human side.
//!
//! Independent of the tiers: a fixed, cheap rating that favors mates,
//! checks, captures and central destinations.

use chess_core::{Move, PieceKind, Position, RulesEngine};
use tracing::warn;

use crate::eval::CENTER_SQUARES;

const MATE_HINT: i32 = 1000;
const CHECK_HINT: i32 = 50;
const CENTER_HINT: i32 = 5;

/// Capture values on the 1/3/3/5/9 scale, indexed by `PieceKind::idx()`.
const CAPTURE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];

#[derive(Debug, Clone, PartialEq)]
pub struct Hint {
    pub mv: Move,
    pub score: i32,
}

impl Hint {
    /// `++` for strong, `+` for good, `=` otherwise.
    pub fn strength(&self) -> &'static str {
        if self.score > 100 {
            "++"
        } else if self.score > 50 {
            "+"
        } else {
            "="
        }
    }
}

fn capture_value(kind: PieceKind) -> i32 {
    CAPTURE_VALUES[kind.idx()]
}

fn rate<R: RulesEngine + ?Sized>(rules: &R, pos: &Position, mv: &Move) -> Option<i32> {
    let next = match rules.apply_move(pos, mv) {
        Ok(next) => next,
        Err(err) => {
            warn!(%err, "skipping hint for unplayable move");
            return None;
        }
    };
    if rules.is_checkmate(&next) {
        return Some(MATE_HINT);
    }

    let mut score = 0;
    if rules.is_check(&next) {
        score += CHECK_HINT;
    }
    if let Some(captured) = mv.captured {
        score += capture_value(captured) * 10;
    }
    if CENTER_SQUARES.contains(&mv.to) {
        score += CENTER_HINT;
    }
    Some(score)
}

/// The `count` best-rated legal moves for the side to move, best first.
/// Equal ratings keep legal-move order.
pub fn suggest_moves<R: RulesEngine + ?Sized>(rules: &R, pos: &Position, count: usize) -> Vec<Hint> {
    let mut hints: Vec<Hint> = rules
        .legal_moves(pos, None)
        .into_iter()
        .filter_map(|mv| rate(rules, pos, &mv).map(|score| Hint { mv, score }))
        .collect();
    hints.sort_by(|a, b| b.score.cmp(&a.score));
    hints.truncate(count);
    hints
}

#[cfg(test)]
#[path = "hint_tests.rs"]
mod hint_tests;
