//! Match results storage and reporting

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use chess_core::{Color, GameStatus};
use serde::{Deserialize, Serialize};
use tiered_engine::Tier;

/// Result of a single game, from one player's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// Stopped at the configured ply limit and scored as a draw.
    MoveLimit,
}

impl Termination {
    /// Termination and White's result for a finished ledger status.
    pub fn from_status(status: GameStatus) -> Option<(Self, GameResult)> {
        let outcome = match status {
            GameStatus::InProgress => return None,
            GameStatus::Checkmate { winner: Color::White } => (Termination::Checkmate, GameResult::Win),
            GameStatus::Checkmate { winner: Color::Black } => (Termination::Checkmate, GameResult::Loss),
            GameStatus::Stalemate => (Termination::Stalemate, GameResult::Draw),
            GameStatus::FiftyMoveRule => (Termination::FiftyMoveRule, GameResult::Draw),
            GameStatus::ThreefoldRepetition => (Termination::ThreefoldRepetition, GameResult::Draw),
            GameStatus::InsufficientMaterial => (Termination::InsufficientMaterial, GameResult::Draw),
        };
        Some(outcome)
    }
}

/// Tally of a match (multiple games)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first tier's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub white: Tier,
    pub black: Tier,
    /// From White's perspective
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    pub pgn: String,
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub tier1: Tier,
    pub tier2: Tier,
    pub seed: u64,
    pub max_moves: u32,
    /// Tally from `tier1`'s perspective
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(tier1: Tier, tier2: Tier, seed: u64, max_moves: u32) -> Self {
        Self {
            tier1,
            tier2,
            seed,
            max_moves,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Match: {} vs {} ===\n", self.tier1, self.tier2);
        let _ = writeln!(
            report,
            "{:<4} {:<8} {:<8} {:<8} {:>6}  {}",
            "#", "White", "Black", "Result", "Plies", "Termination"
        );
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let result = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            let _ = writeln!(
                report,
                "{:<4} {:<8} {:<8} {:<8} {:>6}  {:?}",
                i + 1,
                game.white.to_string(),
                game.black.to_string(),
                result,
                game.plies,
                game.termination
            );
        }

        let _ = writeln!(
            report,
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)",
            self.tier1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        );
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
