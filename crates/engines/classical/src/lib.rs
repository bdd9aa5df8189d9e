//! Classical Chess Bots
//!
//! Move selection for bot-vs-bot games, built on a material plus mobility
//! evaluation:
//! - [`SearchBot::alpha_beta`]: negamax with alpha-beta pruning and a
//!   capture-only quiescence extension
//! - [`SearchBot::negamax`]: the same tree search without pruning or
//!   quiescence
//! - [`HeuristicBot`]: no tree at all, a weighted sum of one-ply heuristics
//!   per legal move
//!
//! All three implement [`chess_core::Engine`]; [`Strategy`] names them for
//! configuration files and the command line.

mod bots;
pub mod eval;
pub mod heuristic;
pub mod ordering;
pub mod quiescence;
pub mod search;
mod session;

use chess_core::Move;

pub use bots::{HeuristicBot, SearchBot, Strategy};
pub use eval::{evaluate, PieceValues, HEURISTIC_VALUES, SEARCH_VALUES};
pub use search::{
    alpha_beta, negamax, opening_move, root_search, Frontier, RootAlgorithm, SearchStats,
};
pub use session::Session;

/// Search score in tenths of a pawn, from the side to move's perspective.
pub type Score = i32;

/// Score units per pawn.
pub const PAWN: Score = 10;

/// Stands in for an unbounded score; safe to negate.
pub const INFINITY: Score = 1_000_000;

/// A move paired with the score it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuedMove {
    pub mv: Move,
    pub score: i32,
}

impl ValuedMove {
    pub fn new(mv: Move, score: i32) -> Self {
        Self { mv, score }
    }
}

/// Highest-scoring entry; the earliest one wins ties
/// (`Iterator::max_by_key` would return the last).
pub fn best_of<I>(moves: I) -> Option<ValuedMove>
where
    I: IntoIterator<Item = ValuedMove>,
{
    moves.into_iter().fold(None, |best, vm| match best {
        Some(b) if vm.score <= b.score => Some(b),
        _ => Some(vm),
    })
}
