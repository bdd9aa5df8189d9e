//! Match harness for the classical bots
//!
//! This crate provides infrastructure for:
//! - Playing games between two bots with per-player clocks
//! - Adjudicating mate, draws and forfeits (illegal move, no move, timeout)
//! - Running many games in parallel and aggregating per-bot statistics
//! - Loading match configs from TOML and saving reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # One game, moves printed as they are played
//! cargo run -p tournament -- play --white alpha-beta --black heuristic
//!
//! # A 100 game match on four threads, report written to disk
//! cargo run -p tournament -- match --bot-a negamax --bot-b heuristic \
//!     --games 100 --threads 4 --report out.json
//! ```

mod arbiter;
mod config;
mod error;
mod match_runner;
mod results;

pub use arbiter::*;
pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
