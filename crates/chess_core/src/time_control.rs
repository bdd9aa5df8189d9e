//! Clocks for bot-vs-bot games.
//!
//! [`GameClock`] is owned by the match harness and tracks each player's
//! remaining time across a game. Before every move the harness hands the
//! player a [`Timer`] snapshot. Bots may consult it, but nothing inside a
//! search stops on its own: the harness adjudicates a timeout after the move
//! comes back.

use std::time::{Duration, Instant};

use crate::types::Color;

/// Per-move view of a player's clock.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    /// Time the player had left when the move was requested
    remaining_at_start: Duration,
    /// When the move was requested
    started: Instant,
}

impl Timer {
    /// Start a timer for a player with `remaining` on the clock.
    pub fn new(remaining: Duration) -> Self {
        Self {
            remaining_at_start: remaining,
            started: Instant::now(),
        }
    }

    /// A timer that never runs out, for analysis and tests.
    pub fn unlimited() -> Self {
        Self::new(Duration::MAX)
    }

    /// Time on the clock when this move was requested.
    pub fn remaining_at_start(&self) -> Duration {
        self.remaining_at_start
    }

    /// Time spent on the current move so far.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left on the clock right now.
    pub fn remaining(&self) -> Duration {
        self.remaining_at_start.saturating_sub(self.elapsed())
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Remaining thinking time for both players in one game.
#[derive(Debug, Clone)]
pub struct GameClock {
    remaining: [Duration; 2],
}

impl GameClock {
    /// Both players start with `per_player`.
    pub fn new(per_player: Duration) -> Self {
        Self {
            remaining: [per_player; 2],
        }
    }

    pub fn remaining(&self, c: Color) -> Duration {
        self.remaining[c.idx()]
    }

    /// Timer snapshot to hand to the player about to move.
    pub fn timer_for(&self, c: Color) -> Timer {
        Timer::new(self.remaining(c))
    }

    /// Deduct `spent` from `c`'s clock.
    ///
    /// Returns true if the player overstepped their remaining time; the clock
    /// is left at zero in that case.
    pub fn charge(&mut self, c: Color, spent: Duration) -> bool {
        let left = &mut self.remaining[c.idx()];
        let flagged = spent > *left;
        *left = left.saturating_sub(spent);
        flagged
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
