//! Tiered Chess Engine
//!
//! Picks a move for one configured side at one of three difficulty tiers.
//! Easy and Medium rank moves with a cheap heuristic plus random jitter;
//! Hard runs a brute-force minimax over the position evaluator.
//!
//! Legality always comes from a [`chess_core::RulesEngine`]; nothing in this
//! crate generates or validates moves on its own.

mod eval;
pub mod hint;
mod search;
mod selector;
mod tier;

/// Engine-side score. Higher is better for the engine.
pub type Score = f64;

/// Score of a position where the engine has mated (negated when mated).
pub const MATE_SCORE: Score = 10_000.0;
/// Score of any drawn position.
pub const DRAW_SCORE: Score = 0.0;
/// Fallback when the rules engine refuses to apply a move it listed.
pub const FAULT_SCORE: Score = 100.0;

pub use eval::{evaluate, piece_value, CENTER_SQUARES};
pub use hint::{suggest_moves, Hint};
pub use search::{search_score, MoveSearch, SearchStats};
pub use selector::{Declined, Selection, Selector};
pub use tier::{Strategy, Tier, TierProfile, UnknownTier};
