//! Asynchronous opponent for a single game.
//!
//! Wraps the synchronous [`tiered_engine::Selector`] in the contract a game
//! loop needs: one request at a time, a tier-dependent thinking delay, a
//! queryable thinking flag, and cancellation.
//!
//! ```no_run
//! # async fn demo() -> Result<(), opponent::OpponentError> {
//! use chess_core::{Color, Position};
//! use opponent::Opponent;
//! use tiered_engine::Tier;
//!
//! let opponent = Opponent::new(Tier::Hard, Color::Black);
//! let reply = opponent.request_move(&Position::startpos())?.await;
//! assert!(reply.is_none()); // White to move, not our turn
//! # Ok(())
//! # }
//! ```

mod cancel;
mod config;
mod error;
mod opponent;

pub use cancel::CancelHandle;
pub use config::OpponentConfig;
pub use error::{ConfigError, OpponentError};
pub use opponent::{Opponent, PendingMove, Settings};
