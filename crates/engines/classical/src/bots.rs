//! The bots the match harness plays against each other.

use std::fmt;
use std::str::FromStr;

use chess_core::{move_to_uci, Engine, Move, Position, SearchResult, Timer};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::heuristic;
use crate::search::{opening_move, root_search, Frontier, RootAlgorithm, SearchStats};
use crate::session::Session;

/// Fixed-depth tree search bot.
///
/// Plays `e2e4` from the initial position without searching; otherwise
/// runs [`root_search`] to its configured depth. Keeps no per-game state.
#[derive(Debug, Clone)]
pub struct SearchBot {
    name: String,
    depth: u8,
    algorithm: RootAlgorithm,
}

impl SearchBot {
    pub const ALPHA_BETA_DEPTH: u8 = 2;
    pub const NEGAMAX_DEPTH: u8 = 3;

    /// Alpha-beta with quiescence at the frontier.
    pub fn alpha_beta(depth: u8) -> Self {
        Self::with_algorithm(
            format!("AlphaBeta d{depth}"),
            depth,
            RootAlgorithm::AlphaBeta(Frontier::Quiescence),
        )
    }

    /// Unpruned negamax with static leaves.
    pub fn negamax(depth: u8) -> Self {
        Self::with_algorithm(format!("Negamax d{depth}"), depth, RootAlgorithm::Negamax)
    }

    fn with_algorithm(name: String, depth: u8, algorithm: RootAlgorithm) -> Self {
        Self {
            name,
            depth: depth.max(1),
            algorithm,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for SearchBot {
    fn search(&mut self, pos: &mut Position, timer: &Timer) -> SearchResult {
        if let Some(mv) = opening_move(pos) {
            return found(mv, 0, 0);
        }

        let mut stats = SearchStats::default();
        let Some(best) = root_search(pos, self.depth, self.algorithm, &mut stats) else {
            warn!("{}: no legal moves in {:?} to move", self.name, pos.side_to_move);
            return SearchResult::no_move();
        };

        debug!(
            "{}: {} score {} nodes {} qs ply {} ({:?} used of {:?})",
            self.name,
            move_to_uci(best.mv),
            best.score,
            stats.nodes,
            stats.max_qs_ply,
            timer.elapsed(),
            timer.remaining_at_start(),
        );

        SearchResult {
            best_move: Some(best.mv),
            score: best.score,
            depth: self.depth,
            nodes: stats.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Flat one-ply scorer; see [`heuristic`].
#[derive(Debug, Clone, Default)]
pub struct HeuristicBot {
    session: Session,
}

impl HeuristicBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(from, to)` of the move this bot played last.
    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.session.last_move()
    }
}

impl Engine for HeuristicBot {
    fn search(&mut self, pos: &mut Position, _timer: &Timer) -> SearchResult {
        self.session.claim(pos.side_to_move);

        if let Some(mv) = opening_move(pos) {
            self.session.remember(mv);
            return found(mv, 0, 0);
        }

        let scored = heuristic::score_moves(pos, &self.session);
        let nodes = scored.len() as u64;
        let Some(best) = crate::best_of(scored) else {
            warn!("Heuristic: no legal moves in {:?} to move", pos.side_to_move);
            return SearchResult::no_move();
        };

        self.session.remember(best.mv);
        debug!("Heuristic: {} score {}", move_to_uci(best.mv), best.score);
        found(best.mv, best.score, nodes)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }

    fn new_game(&mut self) {
        self.session.reset();
    }
}

fn found(mv: Move, score: i32, nodes: u64) -> SearchResult {
    SearchResult {
        best_move: Some(mv),
        score,
        depth: u8::from(nodes > 0),
        nodes,
    }
}

/// Names a bot in configuration files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    AlphaBeta,
    Negamax,
    Heuristic,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::AlphaBeta, Strategy::Negamax, Strategy::Heuristic];

    /// Search depth used when none is configured; `None` for the heuristic bot.
    pub fn default_depth(self) -> Option<u8> {
        match self {
            Strategy::AlphaBeta => Some(SearchBot::ALPHA_BETA_DEPTH),
            Strategy::Negamax => Some(SearchBot::NEGAMAX_DEPTH),
            Strategy::Heuristic => None,
        }
    }

    /// A fresh bot; `depth` overrides the default and is ignored by the
    /// heuristic bot.
    pub fn build(self, depth: Option<u8>) -> Box<dyn Engine> {
        match self {
            Strategy::AlphaBeta => {
                Box::new(SearchBot::alpha_beta(depth.unwrap_or(SearchBot::ALPHA_BETA_DEPTH)))
            }
            Strategy::Negamax => {
                Box::new(SearchBot::negamax(depth.unwrap_or(SearchBot::NEGAMAX_DEPTH)))
            }
            Strategy::Heuristic => Box::new(HeuristicBot::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Negamax => "negamax",
            Strategy::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown strategy '{s}' (expected alpha-beta, negamax or heuristic)")
            })
    }
}

#[cfg(test)]
#[path = "bots_tests.rs"]
mod bots_tests;
