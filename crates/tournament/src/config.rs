//! Match configuration, loadable from TOML.
//!
//! ```toml
//! games = 20
//! time_per_player_ms = 60000
//! threads = 4
//!
//! [bot_a]
//! strategy = "alpha-beta"
//! depth = 2
//!
//! [bot_b]
//! strategy = "heuristic"
//! ```
//!
//! Every field is optional; missing ones take the [`Default`] value.

use std::path::Path;
use std::time::Duration;

use chess_core::Engine;
use classical_engine::Strategy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub strategy: Strategy,
    /// Search depth; `None` uses the strategy's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
}

impl BotConfig {
    pub fn new(strategy: Strategy, depth: Option<u8>) -> Self {
        Self { strategy, depth }
    }

    /// A fresh bot for this side.
    pub fn build(&self) -> Box<dyn Engine> {
        self.strategy.build(self.depth)
    }

    /// Name used in reports, e.g. `alpha-beta d2` or `heuristic`.
    pub fn label(&self) -> String {
        match self.strategy.default_depth() {
            Some(default) => format!("{} d{}", self.strategy, self.depth.unwrap_or(default)),
            None => self.strategy.to_string(),
        }
    }
}

/// Configuration for a match between two bots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Plays White in the first game
    pub bot_a: BotConfig,
    pub bot_b: BotConfig,
    /// Number of games to play
    pub games: u32,
    /// Clock per player per game, in milliseconds
    pub time_per_player_ms: u64,
    /// Plies before the game is declared drawn
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Worker threads for parallel games (0 = one per core, 1 = sequential)
    pub threads: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            bot_a: BotConfig::new(Strategy::AlphaBeta, None),
            bot_b: BotConfig::new(Strategy::Heuristic, None),
            games: 10,
            time_per_player_ms: 60_000,
            max_plies: 400,
            alternate_colors: true,
            threads: 1,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(invalid("games must be at least 1"));
        }
        if self.time_per_player_ms == 0 {
            return Err(invalid("time_per_player_ms must be positive"));
        }
        if self.max_plies == 0 {
            return Err(invalid("max_plies must be at least 1"));
        }
        for (side, bot) in [("bot_a", &self.bot_a), ("bot_b", &self.bot_b)] {
            if bot.depth == Some(0) {
                return Err(invalid(&format!("{side}.depth must be at least 1")));
            }
        }
        Ok(())
    }

    pub fn time_per_player(&self) -> Duration {
        Duration::from_millis(self.time_per_player_ms)
    }

    /// Whether bot A has White in game `index` (0-based).
    pub fn bot_a_is_white(&self, index: u32) -> bool {
        !self.alternate_colors || index % 2 == 0
    }
}

fn invalid(msg: &str) -> TournamentError {
    TournamentError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
