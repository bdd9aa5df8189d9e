//! Board representation, legal move generation, clocks and the [`Engine`]
//! trait shared by the classical bots and the match harness.

pub mod board;
pub mod movegen;
pub mod time_control;
pub mod types;
pub mod uci;

pub use board::*;
pub use movegen::*;
pub use time_control::*;
pub use types::*;
pub use uci::*;

/// What a bot hands back for one turn.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` only when the position had no legal move
    pub best_move: Option<Move>,
    /// Value of `best_move` for the mover, in the bot's own units
    pub score: i32,
    /// Plies searched; 0 for book or flat choices
    pub depth: u8,
    /// Positions visited
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position with no legal moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// A move-choosing bot the harness can seat at the board.
pub trait Engine: Send {
    /// Pick a move for the side to move of `pos`.
    ///
    /// Bots may explore `pos` in place but must hand it back unchanged.
    /// `timer` is informational; the harness charges the clock after the
    /// call returns.
    fn search(&mut self, pos: &mut Position, timer: &Timer) -> SearchResult;

    /// Name used in logs and reports.
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Forget per-game state (colour, move memory) before a new game.
    fn new_game(&mut self) {}
}
