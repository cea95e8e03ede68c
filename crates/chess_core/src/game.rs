//! Game ledger: the canonical record of a game in progress.
//!
//! The ledger is an append-only list of applied moves plus the position they
//! lead to. Undo truncates the list and re-derives the position from the
//! starting position, so there is exactly one source of truth for history.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::debug;

use crate::error::RulesError;
use crate::position::Position;
use crate::rules::{RulesEngine, StandardRules};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no legal move from {from} to {to}")]
    NoSuchMove { from: String, to: String },
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// A move as it was played, with the position it was played from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub fen_before: String,
}

/// Game result, as far as the rules can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::FiftyMoveRule
                | GameStatus::ThreefoldRepetition
                | GameStatus::InsufficientMaterial
        )
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::InProgress => "*",
            GameStatus::Checkmate { winner: Color::White } => "1-0",
            GameStatus::Checkmate { winner: Color::Black } => "0-1",
            _ => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameLedger {
    rules: StandardRules,
    initial: Position,
    position: Position,
    records: Vec<MoveRecord>,
}

impl Default for GameLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLedger {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            rules: StandardRules,
            initial: position.clone(),
            position,
            records: Vec::new(),
        }
    }

    /// Back to the starting position of this ledger.
    pub fn reset(&mut self) {
        self.position = self.initial.clone();
        self.records.clear();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.records.last().map(|r| &r.mv)
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.position, None)
    }

    /// Plays the legal move from `from` to `to`. A missing promotion piece
    /// defaults to a queen.
    pub fn make_move(&mut self, from: u8, to: u8, promo: Option<PieceKind>) -> Result<Move, GameError> {
        let candidates = self.rules.legal_moves(&self.position, Some(from));
        let wanted = promo.unwrap_or(PieceKind::Queen);
        let mv = candidates
            .into_iter()
            .find(|m| m.from == from && m.to == to && (m.promo.is_none() || m.promo == Some(wanted)))
            .ok_or_else(|| GameError::NoSuchMove {
                from: sq_to_coord(from),
                to: sq_to_coord(to),
            })?;
        self.push(mv.clone())?;
        Ok(mv)
    }

    /// Plays coordinate text such as `e2e4` or `e7e8n`.
    pub fn make_coord_move(&mut self, text: &str) -> Result<Move, GameError> {
        let (from, to, promo) = parse_coord_move(text)?;
        self.make_move(from, to, promo)
    }

    /// Plays a move produced elsewhere (e.g. by the engine) after checking it
    /// against the current legal move list.
    pub fn apply(&mut self, mv: &Move) -> Result<(), GameError> {
        let legal = self
            .rules
            .legal_moves(&self.position, Some(mv.from))
            .into_iter()
            .find(|m| m.matches(mv.from, mv.to, mv.promo))
            .ok_or_else(|| GameError::NoSuchMove {
                from: sq_to_coord(mv.from),
                to: sq_to_coord(mv.to),
            })?;
        self.push(legal)
    }

    fn push(&mut self, mv: Move) -> Result<(), GameError> {
        let next = self.rules.apply_move(&self.position, &mv)?;
        debug!(san = %mv.san, ply = self.records.len() + 1, "move recorded");
        let fen_before = std::mem::replace(&mut self.position, next).fen();
        self.records.push(MoveRecord { mv, fen_before });
        Ok(())
    }

    /// Takes back the last move. Returns it, or `None` at the start.
    pub fn undo(&mut self) -> Option<Move> {
        let undone = self.records.pop()?;
        let mut position = self.initial.clone();
        for record in &self.records {
            match self.rules.apply_move(&position, &record.mv) {
                Ok(next) => position = next,
                Err(err) => {
                    // Every record was legal when it was pushed.
                    tracing::error!(%err, "ledger replay failed");
                    break;
                }
            }
        }
        self.position = position;
        debug!(san = %undone.mv.san, "move undone");
        Some(undone.mv)
    }

    pub fn status(&self) -> GameStatus {
        let pos = &self.position;
        if self.rules.is_checkmate(pos) {
            GameStatus::Checkmate {
                winner: pos.side_to_move().other(),
            }
        } else if self.rules.is_stalemate(pos) {
            GameStatus::Stalemate
        } else if pos.is_fifty_move_draw() {
            GameStatus::FiftyMoveRule
        } else if pos.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if pos.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn is_check(&self) -> bool {
        self.rules.is_check(&self.position)
    }

    /// Destination squares reachable from `sq` for the side to move.
    pub fn legal_destinations(&self, sq: u8) -> Vec<u8> {
        let mut targets: Vec<u8> = self
            .rules
            .legal_moves(&self.position, Some(sq))
            .into_iter()
            .map(|m| m.to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    fn find(&self, from: u8, to: u8) -> Option<Move> {
        self.rules
            .legal_moves(&self.position, Some(from))
            .into_iter()
            .find(|m| m.to == to)
    }

    pub fn is_promotion(&self, from: u8, to: u8) -> bool {
        self.find(from, to).is_some_and(|m| m.promo.is_some())
    }

    pub fn is_castling(&self, from: u8, to: u8) -> bool {
        self.find(from, to).is_some_and(|m| m.is_castle())
    }

    pub fn is_en_passant(&self, from: u8, to: u8) -> bool {
        self.find(from, to).is_some_and(|m| m.is_en_passant())
    }

    pub fn fen(&self) -> String {
        self.position.fen()
    }

    /// Numbered SAN movetext. The result token is appended once the game is
    /// over.
    pub fn pgn(&self) -> String {
        let mut out = String::new();
        let mut number = self.initial.fullmove_number();
        let mut side = self.initial.side_to_move();

        for (i, record) in self.records.iter().enumerate() {
            match side {
                Color::White => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    let _ = write!(out, "{}. {}", number, record.mv.san);
                }
                Color::Black => {
                    if i == 0 {
                        let _ = write!(out, "{}... {}", number, record.mv.san);
                    } else {
                        let _ = write!(out, " {}", record.mv.san);
                    }
                    number += 1;
                }
            }
            side = side.other();
        }

        let status = self.status();
        if status.is_over() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(status.result_token());
        }
        out
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
