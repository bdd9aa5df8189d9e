//! Game adjudication

use std::collections::HashMap;
use std::fmt;

use chess_core::{has_legal_move, Color, Position};
use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    Repetition,
    InsufficientMaterial,
    MaxPlies,
    /// The mover returned a move that is not legal in the position
    IllegalMove,
    /// The mover returned no move although legal moves existed
    NoMove,
    /// The mover used more time than was left on its clock
    Timeout,
}

impl Termination {
    /// Forfeits the side to move caused rather than lost over the board.
    pub fn is_forfeit(self) -> bool {
        matches!(
            self,
            Termination::IllegalMove | Termination::NoMove | Termination::Timeout
        )
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWins(Termination),
    BlackWins(Termination),
    Draw(Termination),
}

impl GameResult {
    /// `color` loses the game.
    pub fn loss_for(color: Color, termination: Termination) -> Self {
        match color {
            Color::White => GameResult::BlackWins(termination),
            Color::Black => GameResult::WhiteWins(termination),
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins(_) => Some(Color::White),
            GameResult::BlackWins(_) => Some(Color::Black),
            GameResult::Draw(_) => None,
        }
    }

    pub fn termination(&self) -> Termination {
        match *self {
            GameResult::WhiteWins(t) | GameResult::BlackWins(t) | GameResult::Draw(t) => t,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw(_))
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = match self {
            GameResult::WhiteWins(_) => "1-0",
            GameResult::BlackWins(_) => "0-1",
            GameResult::Draw(_) => "1/2-1/2",
        };
        write!(f, "{score} ({:?})", self.termination())
    }
}

/// Decides when a game is over.
///
/// Tracks how often each position has occurred so threefold repetition can
/// be detected; feed it every position of the game through [`Arbiter::after_move`].
#[derive(Debug, Clone)]
pub struct Arbiter {
    seen: HashMap<u64, u8>,
    max_plies: u32,
    plies: u32,
}

impl Arbiter {
    pub fn new(start: &Position, max_plies: u32) -> Self {
        let mut seen = HashMap::new();
        seen.insert(start.position_key(), 1);
        Self {
            seen,
            max_plies,
            plies: 0,
        }
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Record the position reached by the move just played and adjudicate it.
    pub fn after_move(&mut self, pos: &mut Position) -> Option<GameResult> {
        self.plies += 1;
        let count = self.seen.entry(pos.position_key()).or_insert(0);
        *count += 1;
        let repeated = *count >= 3;

        if !has_legal_move(pos) {
            return Some(if pos.in_check(pos.side_to_move) {
                GameResult::loss_for(pos.side_to_move, Termination::Checkmate)
            } else {
                GameResult::Draw(Termination::Stalemate)
            });
        }
        if pos.is_fifty_move_draw() {
            return Some(GameResult::Draw(Termination::FiftyMoveRule));
        }
        if repeated {
            return Some(GameResult::Draw(Termination::Repetition));
        }
        if pos.is_insufficient_material() {
            return Some(GameResult::Draw(Termination::InsufficientMaterial));
        }
        if self.plies >= self.max_plies {
            return Some(GameResult::Draw(Termination::MaxPlies));
        }
        None
    }
}

#[cfg(test)]
#[path = "arbiter_tests.rs"]
mod arbiter_tests;
