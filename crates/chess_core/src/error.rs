//! Error types for the rules adapter.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("illegal move {uci} in position {fen}")]
    IllegalMove { uci: String, fen: String },
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("invalid color '{0}', expected 'white' or 'black'")]
    InvalidColor(String),
    #[error("invalid move text '{0}'")]
    InvalidMoveText(String),
}
