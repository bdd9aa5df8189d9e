//! Match runner for playing games between bots

use chess_core::{legal_moves, move_to_uci, Color, Engine, GameClock, Move, Position};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::arbiter::{Arbiter, GameResult, Termination};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::results::MatchReport;

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Moves in UCI notation, in the order they were played
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn plies(&self) -> u32 {
        self.moves.len() as u32
    }
}

/// Runs matches between two bots
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every configured game, in parallel unless `threads == 1`.
    ///
    /// Each worker builds its own bots from the config, so no bot is ever
    /// shared between threads.
    pub fn run(&self) -> Result<MatchReport> {
        if self.config.threads == 1 {
            let mut bot_a = self.config.bot_a.build();
            let mut bot_b = self.config.bot_b.build();
            return Ok(self.run_match(bot_a.as_mut(), bot_b.as_mut()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;
        let workers = pool.current_num_threads().max(1) as u32;
        let chunk = self.config.games.div_ceil(workers);

        let partials: Vec<MatchReport> = pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|w| {
                    let start = (w * chunk).min(self.config.games);
                    let end = (start + chunk).min(self.config.games);
                    let mut bot_a = self.config.bot_a.build();
                    let mut bot_b = self.config.bot_b.build();
                    self.play_range(start..end, bot_a.as_mut(), bot_b.as_mut())
                })
                .collect()
        });

        let mut report = MatchReport::new(self.config.clone());
        for partial in &partials {
            report.merge(partial);
        }
        Ok(report)
    }

    /// Play all configured games sequentially with the given bots.
    pub fn run_match(&self, bot_a: &mut dyn Engine, bot_b: &mut dyn Engine) -> MatchReport {
        self.play_range(0..self.config.games, bot_a, bot_b)
    }

    fn play_range(
        &self,
        games: std::ops::Range<u32>,
        bot_a: &mut dyn Engine,
        bot_b: &mut dyn Engine,
    ) -> MatchReport {
        let mut report = MatchReport::new(self.config.clone());

        for index in games {
            let a_white = self.config.bot_a_is_white(index);
            let game = if a_white {
                self.play_game(bot_a, bot_b)
            } else {
                self.play_game(bot_b, bot_a)
            };

            report.record(game.result, game.plies(), a_white);
            info!(
                "Game {}/{}: {} in {} plies ({} was {})",
                index + 1,
                self.config.games,
                game.result,
                game.plies(),
                report.bot_a.name,
                if a_white { "White" } else { "Black" },
            );
        }

        report
    }

    /// Play a single game from the initial position.
    ///
    /// Each bot gets its own copy of the position and a timer for its clock.
    /// A bot that returns no move, an illegal move, or overruns its clock
    /// loses immediately.
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut pos = Position::startpos();
        white.new_game();
        black.new_game();

        let mut clock = GameClock::new(self.config.time_per_player());
        let mut arbiter = Arbiter::new(&pos, self.config.max_plies);
        let mut moves = Vec::new();

        loop {
            let side = pos.side_to_move;
            let bot: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let timer = clock.timer_for(side);
            let mut scratch = pos.clone();
            let result = bot.search(&mut scratch, &timer);
            let spent = timer.elapsed();

            if clock.charge(side, spent) {
                warn!("{} lost on time after {spent:?}", bot.name());
                return forfeit(side, Termination::Timeout, moves);
            }

            let Some(chosen) = result.best_move else {
                warn!("{} returned no move", bot.name());
                return forfeit(side, Termination::NoMove, moves);
            };

            let Some(mv) = resolve(&pos, chosen) else {
                warn!("{} played illegal move {}", bot.name(), move_to_uci(chosen));
                return forfeit(side, Termination::IllegalMove, moves);
            };

            debug!("{} plays {} (score {})", bot.name(), move_to_uci(mv), result.score);
            pos.make_move(mv);
            moves.push(move_to_uci(mv));

            if let Some(result) = arbiter.after_move(&mut pos) {
                return GameRecord { result, moves };
            }
        }
    }
}

/// The legal move matching `chosen` by squares and promotion piece.
fn resolve(pos: &Position, chosen: Move) -> Option<Move> {
    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == chosen.from && m.to == chosen.to && m.promo == chosen.promo)
}

fn forfeit(side: Color, termination: Termination, moves: Vec<String>) -> GameRecord {
    GameRecord {
        result: GameResult::loss_for(side, termination),
        moves,
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
