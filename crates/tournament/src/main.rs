//! Tournament CLI
//!
//! Play single games or whole matches between the classical bots.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use classical_engine::Strategy;
use tournament::{BotConfig, MatchConfig, MatchRunner};

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "Bot-vs-bot chess matches", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one game and print its moves
    Play(PlayArgs),
    /// Play a match and print (optionally save) the statistics
    Match(MatchArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[arg(long, default_value_t = Strategy::AlphaBeta)]
    white: Strategy,
    #[arg(long, value_name = "N")]
    white_depth: Option<u8>,
    #[arg(long, default_value_t = Strategy::Heuristic)]
    black: Strategy,
    #[arg(long, value_name = "N")]
    black_depth: Option<u8>,
    /// Clock per player in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 60_000)]
    time_ms: u64,
    #[arg(long, value_name = "N", default_value_t = 400)]
    max_plies: u32,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// TOML match config; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long)]
    bot_a: Option<Strategy>,
    #[arg(long, value_name = "N")]
    depth_a: Option<u8>,
    #[arg(long)]
    bot_b: Option<Strategy>,
    #[arg(long, value_name = "N")]
    depth_b: Option<u8>,
    #[arg(long, short = 'g', value_name = "N")]
    games: Option<u32>,
    /// Clock per player in milliseconds
    #[arg(long, value_name = "MS")]
    time_ms: Option<u64>,
    #[arg(long, value_name = "N")]
    max_plies: Option<u32>,
    /// Worker threads (0 = one per core, 1 = sequential)
    #[arg(long, short = 'j', value_name = "N")]
    threads: Option<usize>,
    /// Keep bot A on White for every game
    #[arg(long)]
    no_alternate: bool,
    /// Write the JSON report here
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl MatchArgs {
    fn into_config(self) -> Result<(MatchConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("loading match config {}", path.display()))?,
            None => MatchConfig::default(),
        };

        if let Some(strategy) = self.bot_a {
            config.bot_a = BotConfig::new(strategy, None);
        }
        if let Some(strategy) = self.bot_b {
            config.bot_b = BotConfig::new(strategy, None);
        }
        if self.depth_a.is_some() {
            config.bot_a.depth = self.depth_a;
        }
        if self.depth_b.is_some() {
            config.bot_b.depth = self.depth_b;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(ms) = self.time_ms {
            config.time_per_player_ms = ms;
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if self.no_alternate {
            config.alternate_colors = false;
        }

        config.validate()?;
        Ok((config, self.report))
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn play(args: PlayArgs) -> Result<()> {
    let config = MatchConfig {
        bot_a: BotConfig::new(args.white, args.white_depth),
        bot_b: BotConfig::new(args.black, args.black_depth),
        games: 1,
        time_per_player_ms: args.time_ms,
        max_plies: args.max_plies,
        ..MatchConfig::default()
    };
    config.validate()?;

    let mut white = config.bot_a.build();
    let mut black = config.bot_b.build();
    println!("=== {} (White) vs {} (Black) ===", config.bot_a.label(), config.bot_b.label());

    let runner = MatchRunner::new(config);
    let game = runner.play_game(white.as_mut(), black.as_mut());

    for (i, pair) in game.moves.chunks(2).enumerate() {
        println!("{:>3}. {}", i + 1, pair.join(" "));
    }
    println!("Result: {}", game.result);
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<()> {
    let (config, report_path) = args.into_config()?;
    println!(
        "=== Match: {} vs {} ===",
        config.bot_a.label(),
        config.bot_b.label()
    );
    println!(
        "Games: {}, Clock: {} ms, Threads: {}",
        config.games, config.time_per_player_ms, config.threads
    );
    println!();

    let runner = MatchRunner::new(config);
    let report = runner.run().context("running match")?;
    println!("{}", report.summary());

    if let Some(path) = report_path {
        report
            .save(&path)
            .with_context(|| format!("writing report {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Match(args) => run_match(args),
    }
}
