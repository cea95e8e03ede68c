//! Arena for the tiered opponent
//!
//! This crate provides:
//! - Matches between two difficulty tiers, with JSON reports
//! - An interactive terminal game against the asynchronous opponent
//!
//! # Usage
//!
//! ```bash
//! # Ten games of hard against easy, colors alternating
//! cargo run -p arena -- match hard easy --games 10
//!
//! # Play White against a medium opponent
//! cargo run -p arena -- play --tier medium --side black
//! ```

mod match_runner;
pub mod play;
mod results;

pub use match_runner::*;
pub use results::*;
