//! Chess rules adapter for the tiered opponent.
//!
//! Legality comes from `cozy-chess`; this crate wraps it in the vocabulary
//! the engine speaks: positions with repetition history, moves annotated
//! with captures, flags and SAN, and a game ledger.

pub mod error;
pub mod game;
pub mod position;
pub mod rules;
mod san;
pub mod types;

pub use error::RulesError;
pub use game::{GameError, GameLedger, GameStatus, MoveRecord};
pub use position::Position;
pub use rules::{RulesEngine, StandardRules};
pub use types::*;
