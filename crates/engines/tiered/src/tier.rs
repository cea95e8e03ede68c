//! Difficulty tiers and the profile each one maps to.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// How candidate moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Capture/promotion/check/castle bonuses on the move itself.
    Heuristic,
    /// Minimax over the evaluator, `depth` plies past the candidate.
    Search { depth: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    pub strategy: Strategy,
    /// Upper bound of the uniform noise added to heuristic scores.
    pub jitter: f64,
    /// Chance of discarding the best move for a random legal one.
    pub blunder_chance: f64,
    /// Simulated latency before the move is handed over.
    pub think_time: Duration,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn profile(self) -> TierProfile {
        match self {
            Tier::Easy => TierProfile {
                strategy: Strategy::Heuristic,
                jitter: 30.0,
                blunder_chance: 0.3,
                think_time: Duration::from_millis(300),
            },
            Tier::Medium => TierProfile {
                strategy: Strategy::Heuristic,
                jitter: 10.0,
                blunder_chance: 0.0,
                think_time: Duration::from_millis(500),
            },
            Tier::Hard => TierProfile {
                strategy: Strategy::Search { depth: 2 },
                jitter: 0.0,
                blunder_chance: 0.0,
                think_time: Duration::from_millis(800),
            },
        }
    }

    pub fn think_time(self) -> Duration {
        self.profile().think_time
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Easy => write!(f, "easy"),
            Tier::Medium => write!(f, "medium"),
            Tier::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier `{0}` (expected easy, medium or hard)")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Tier::Easy),
            "medium" => Ok(Tier::Medium),
            "hard" => Ok(Tier::Hard),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}
