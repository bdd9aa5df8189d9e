//! Match statistics and report persistence

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::ops::{Add, AddAssign};
use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::arbiter::{GameResult, Termination};
use crate::config::MatchConfig;
use crate::error::Result;

/// Results of one bot over a match (or part of one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMatchStats {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Losses on time
    pub timeouts: u32,
    /// Losses by playing an illegal move
    pub illegal_moves: u32,
    /// Losses by returning no move
    pub no_moves: u32,
}

impl BotMatchStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game: 1 for a win, 0.5 for a draw
    pub fn score(&self) -> f64 {
        let total = self.games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Count one finished game in which this bot played `color`.
    pub fn record(&mut self, result: GameResult, color: Color) {
        match result.winner() {
            None => self.draws += 1,
            Some(winner) if winner == color => self.wins += 1,
            Some(_) => {
                self.losses += 1;
                match result.termination() {
                    Termination::Timeout => self.timeouts += 1,
                    Termination::IllegalMove => self.illegal_moves += 1,
                    Termination::NoMove => self.no_moves += 1,
                    _ => {}
                }
            }
        }
    }
}

impl AddAssign<&BotMatchStats> for BotMatchStats {
    fn add_assign(&mut self, other: &BotMatchStats) {
        if self.name.is_empty() {
            self.name = other.name.clone();
        }
        self.wins += other.wins;
        self.losses += other.losses;
        self.draws += other.draws;
        self.timeouts += other.timeouts;
        self.illegal_moves += other.illegal_moves;
        self.no_moves += other.no_moves;
    }
}

impl Add for BotMatchStats {
    type Output = BotMatchStats;

    fn add(mut self, other: BotMatchStats) -> BotMatchStats {
        self += &other;
        self
    }
}

/// Everything a match produced, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub bot_a: BotMatchStats,
    pub bot_b: BotMatchStats,
    /// How the games ended
    pub terminations: BTreeMap<Termination, u32>,
    /// Total plies over all games
    pub plies: u64,
}

impl MatchReport {
    pub fn new(config: MatchConfig) -> Self {
        let bot_a = BotMatchStats::new(config.bot_a.label());
        let bot_b = BotMatchStats::new(config.bot_b.label());
        Self {
            config,
            bot_a,
            bot_b,
            terminations: BTreeMap::new(),
            plies: 0,
        }
    }

    pub fn games(&self) -> u32 {
        self.bot_a.games()
    }

    /// Count one game; `bot_a_white` says which side bot A played.
    pub fn record(&mut self, result: GameResult, plies: u32, bot_a_white: bool) {
        let (a_color, b_color) = if bot_a_white {
            (Color::White, Color::Black)
        } else {
            (Color::Black, Color::White)
        };
        self.bot_a.record(result, a_color);
        self.bot_b.record(result, b_color);
        *self.terminations.entry(result.termination()).or_insert(0) += 1;
        self.plies += u64::from(plies);
    }

    /// Fold in a report of the same match played elsewhere.
    pub fn merge(&mut self, other: &MatchReport) {
        self.bot_a += &other.bot_a;
        self.bot_b += &other.bot_b;
        for (&termination, &count) in &other.terminations {
            *self.terminations.entry(termination).or_insert(0) += count;
        }
        self.plies += other.plies;
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== {} vs {} ({} games) ===",
            self.bot_a.name,
            self.bot_b.name,
            self.games()
        );
        let _ = writeln!(
            out,
            "{:<20} {:>5} {:>5} {:>5} {:>8} {:>8} {:>8} {:>7}",
            "Bot", "W", "L", "D", "Timeout", "Illegal", "NoMove", "Score"
        );
        let _ = writeln!(out, "{}", "-".repeat(72));
        for stats in [&self.bot_a, &self.bot_b] {
            let _ = writeln!(
                out,
                "{:<20} {:>5} {:>5} {:>5} {:>8} {:>8} {:>8} {:>6.1}%",
                stats.name,
                stats.wins,
                stats.losses,
                stats.draws,
                stats.timeouts,
                stats.illegal_moves,
                stats.no_moves,
                stats.score() * 100.0
            );
        }
        if !self.terminations.is_empty() {
            let endings: Vec<String> = self
                .terminations
                .iter()
                .map(|(t, n)| format!("{t:?} {n}"))
                .collect();
            let _ = writeln!(out, "Endings: {}", endings.join(", "));
        }
        out
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
