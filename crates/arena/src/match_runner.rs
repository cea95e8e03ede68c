//! Match runner for playing games between tiers

use chess_core::{Color, GameLedger, StandardRules};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiered_engine::{Selector, Tier};
use tracing::{info, warn};

use crate::results::{GameRecord, GameResult, MatchReport, Termination};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Game `n` is played with seed `seed + n`
    pub seed: u64,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            seed: 0,
            verbose: true,
        }
    }
}

/// Runs matches between two tiers using the synchronous selector
pub struct MatchRunner {
    config: MatchConfig,
    rules: StandardRules,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            rules: StandardRules,
        }
    }

    /// Run a match between two tiers
    ///
    /// The tally is from `tier1`'s perspective
    pub fn run_match(&self, tier1: Tier, tier2: Tier) -> MatchReport {
        let mut report = MatchReport::new(tier1, tier2, self.config.seed, self.config.max_moves);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let tier1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white, black) = if tier1_white { (tier1, tier2) } else { (tier2, tier1) };
            let seed = self.config.seed.wrapping_add(u64::from(game_num));

            let game = self.play_game(white, black, seed);
            let result = if tier1_white {
                game.result
            } else {
                game.result.flipped()
            };
            report.result.record(result);

            info!(
                game = game_num + 1,
                %white,
                %black,
                termination = ?game.termination,
                plies = game.plies,
                "game finished"
            );
            if self.config.verbose {
                let color = if tier1_white { "W" } else { "B" };
                let outcome = match game.result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    report.result.wins,
                    report.result.losses,
                    report.result.draws
                );
            }
            report.games.push(game);
        }

        report
    }

    /// Play a single game from the standard start
    pub fn play_game(&self, white: Tier, black: Tier, seed: u64) -> GameRecord {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ledger = GameLedger::new();
        let selectors = [
            Selector::new(&self.rules, white, Color::White),
            Selector::new(&self.rules, black, Color::Black),
        ];

        let mut outcome = None;
        while (ledger.records().len() as u32) < self.config.max_moves {
            if let Some(done) = Termination::from_status(ledger.status()) {
                outcome = Some(done);
                break;
            }
            let selector = &selectors[ledger.side_to_move().idx()];
            let selection = match selector.choose(ledger.position(), &mut rng) {
                Ok(selection) => selection,
                Err(reason) => {
                    warn!(%reason, fen = %ledger.fen(), "selector declined in a live game");
                    break;
                }
            };
            if let Err(err) = ledger.apply(&selection.mv) {
                warn!(%err, "selected move rejected by the ledger");
                break;
            }
        }

        let (termination, result) = outcome
            .or_else(|| Termination::from_status(ledger.status()))
            .unwrap_or((Termination::MoveLimit, GameResult::Draw));

        GameRecord {
            white,
            black,
            result,
            termination,
            plies: ledger.records().len() as u32,
            pgn: ledger.pgn(),
        }
    }
}

/// Quick utility to run a single quiet match
pub fn quick_match(tier1: Tier, tier2: Tier, num_games: u32, max_moves: u32) -> MatchReport {
    let config = MatchConfig {
        num_games,
        max_moves,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(tier1, tier2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
