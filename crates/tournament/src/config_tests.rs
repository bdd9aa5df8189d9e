use super::*;

#[test]
fn test_empty_document_uses_defaults() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.time_per_player(), Duration::from_secs(60));
}

#[test]
fn test_partial_document() {
    let config = MatchConfig::from_toml_str(
        r#"
        games = 4
        threads = 2

        [bot_a]
        strategy = "negamax"
        depth = 1

        [bot_b]
        strategy = "heuristic"
        "#,
    )
    .unwrap();

    assert_eq!(config.games, 4);
    assert_eq!(config.threads, 2);
    assert_eq!(config.bot_a, BotConfig::new(Strategy::Negamax, Some(1)));
    assert_eq!(config.bot_b, BotConfig::new(Strategy::Heuristic, None));
    assert_eq!(config.max_plies, MatchConfig::default().max_plies);
}

#[test]
fn test_unknown_strategy_is_a_toml_error() {
    let err = MatchConfig::from_toml_str("[bot_a]\nstrategy = \"minimax\"").unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)), "{err}");
}

#[test]
fn test_validation() {
    for text in [
        "games = 0",
        "time_per_player_ms = 0",
        "max_plies = 0",
        "[bot_b]\ndepth = 0",
    ] {
        let err = MatchConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidConfig(_)), "{text}: {err}");
    }
}

#[test]
fn test_serializes_back_to_toml() {
    let config = MatchConfig {
        bot_a: BotConfig::new(Strategy::AlphaBeta, Some(3)),
        games: 7,
        ..MatchConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(MatchConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_labels() {
    assert_eq!(BotConfig::new(Strategy::AlphaBeta, None).label(), "alpha-beta d2");
    assert_eq!(BotConfig::new(Strategy::Negamax, Some(1)).label(), "negamax d1");
    assert_eq!(BotConfig::new(Strategy::Heuristic, Some(4)).label(), "heuristic");
}

#[test]
fn test_color_alternation() {
    let mut config = MatchConfig::default();
    assert!(config.bot_a_is_white(0));
    assert!(!config.bot_a_is_white(1));
    assert!(config.bot_a_is_white(2));

    config.alternate_colors = false;
    assert!(config.bot_a_is_white(1));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = MatchConfig::load("/nonexistent/match.toml").unwrap_err();
    assert!(matches!(err, TournamentError::Io(_)));
}
