use super::*;
use crate::config::BotConfig;
use chess_core::{PieceKind, SearchResult, Timer};
use classical_engine::{HeuristicBot, SearchBot, Strategy};
use std::time::Duration;

/// Plays a fixed (and usually illegal) move every turn.
struct StubbornBot(Move);

impl Engine for StubbornBot {
    fn search(&mut self, _pos: &mut Position, _timer: &Timer) -> SearchResult {
        SearchResult {
            best_move: Some(self.0),
            ..SearchResult::no_move()
        }
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

/// Never answers with a move.
struct SilentBot;

impl Engine for SilentBot {
    fn search(&mut self, _pos: &mut Position, _timer: &Timer) -> SearchResult {
        SearchResult::no_move()
    }

    fn name(&self) -> &str {
        "Silent"
    }
}

/// Thinks longer than any clock in these tests allows.
struct SlowBot(HeuristicBot);

impl Engine for SlowBot {
    fn search(&mut self, pos: &mut Position, timer: &Timer) -> SearchResult {
        std::thread::sleep(Duration::from_millis(20));
        self.0.search(pos, timer)
    }

    fn name(&self) -> &str {
        "Slow"
    }
}

fn quick_config() -> MatchConfig {
    MatchConfig {
        bot_a: BotConfig::new(Strategy::Heuristic, None),
        bot_b: BotConfig::new(Strategy::AlphaBeta, Some(1)),
        games: 2,
        max_plies: 16,
        ..MatchConfig::default()
    }
}

#[test]
fn test_self_play() {
    let runner = MatchRunner::new(quick_config());
    let mut bot_a = HeuristicBot::new();
    let mut bot_b = SearchBot::alpha_beta(1);

    let report = runner.run_match(&mut bot_a, &mut bot_b);

    assert_eq!(report.games(), 2);
    assert_eq!(report.bot_b.games(), 2);
    assert_eq!(report.bot_a.wins, report.bot_b.losses);
    assert_eq!(report.bot_a.draws, report.bot_b.draws);
    assert_eq!(report.terminations.values().sum::<u32>(), 2);
}

#[test]
fn test_game_opens_with_e2e4_and_respects_max_plies() {
    let runner = MatchRunner::new(quick_config());
    let game = runner.play_game(&mut HeuristicBot::new(), &mut HeuristicBot::new());

    assert_eq!(game.moves[0], "e2e4");
    assert!(game.plies() <= 16);
    if game.plies() == 16 {
        assert_eq!(game.result, GameResult::Draw(Termination::MaxPlies));
    }
}

#[test]
fn test_illegal_move_forfeits() {
    let runner = MatchRunner::new(quick_config());
    // e1e3 is never legal from the initial position
    let mut cheat = StubbornBot(Move::new(4, 20, PieceKind::King));

    let game = runner.play_game(&mut cheat, &mut HeuristicBot::new());

    assert_eq!(game.result, GameResult::BlackWins(Termination::IllegalMove));
    assert!(game.moves.is_empty());
}

#[test]
fn test_missing_move_forfeits() {
    let runner = MatchRunner::new(quick_config());
    let game = runner.play_game(&mut HeuristicBot::new(), &mut SilentBot);
    assert_eq!(game.result, GameResult::WhiteWins(Termination::NoMove));
    assert_eq!(game.moves, vec!["e2e4".to_string()]);
}

#[test]
fn test_timeout_forfeits() {
    let config = MatchConfig {
        time_per_player_ms: 5,
        ..quick_config()
    };
    let runner = MatchRunner::new(config);
    let mut slow = SlowBot(HeuristicBot::new());

    let game = runner.play_game(&mut HeuristicBot::new(), &mut slow);

    assert_eq!(game.result, GameResult::WhiteWins(Termination::Timeout));
}

#[test]
fn test_forfeits_are_counted_against_the_offender() {
    let runner = MatchRunner::new(MatchConfig {
        games: 4,
        ..quick_config()
    });
    let mut cheat = StubbornBot(Move::new(4, 20, PieceKind::King));

    let report = runner.run_match(&mut cheat, &mut HeuristicBot::new());

    // As Black the stubborn bot still forfeits on its first turn
    assert_eq!(report.bot_a.losses, 4);
    assert_eq!(report.bot_a.illegal_moves, 4);
    assert_eq!(report.bot_b.wins, 4);
    assert_eq!(report.bot_b.illegal_moves, 0);
}

#[test]
fn test_parallel_run_matches_sequential() {
    let sequential = MatchRunner::new(MatchConfig {
        games: 5,
        threads: 1,
        ..quick_config()
    })
    .run()
    .unwrap();
    let parallel = MatchRunner::new(MatchConfig {
        games: 5,
        threads: 3,
        ..quick_config()
    })
    .run()
    .unwrap();

    assert_eq!(parallel.games(), 5);
    assert_eq!(parallel.bot_a, sequential.bot_a);
    assert_eq!(parallel.bot_b, sequential.bot_b);
    assert_eq!(parallel.terminations, sequential.terminations);
    assert_eq!(parallel.plies, sequential.plies);
}
