use super::*;
use chess_core::{legal_moves, move_to_uci};

const MIDDLEGAME: &str = "rnbqkb1r/pp2pppp/5n2/2pp4/3P4/2N2N2/PPP1PPPP/R1BQKB1R b KQkq - 1 4";
const BACK_RANK_MATE: &str = "6k1/5ppp/4p3/8/8/7q/5PPP/R5K1 w - - 0 1";

fn full_window(pos: &mut Position, depth: u8, stats: &mut SearchStats) -> Score {
    alpha_beta(pos, -INFINITY, INFINITY, depth, Frontier::Static, stats)
}

#[test]
fn test_alpha_beta_matches_negamax() {
    for (fen, max_depth) in [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
        (MIDDLEGAME, 2),
        ("4k3/8/8/3q1p2/4P3/2N5/8/4K3 w - - 0 1", 3),
    ] {
        for depth in 1..=max_depth {
            let mut pos = Position::from_fen(fen);
            let mut pruned = SearchStats::default();
            let mut full = SearchStats::default();

            let ab = full_window(&mut pos, depth, &mut pruned);
            let nm = negamax(&mut pos, depth, &mut full);

            assert_eq!(ab, nm, "{fen} at depth {depth}");
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn test_pruning_skips_nodes() {
    let mut pos = Position::startpos();
    let mut pruned = SearchStats::default();
    let mut full = SearchStats::default();
    full_window(&mut pos, 3, &mut pruned);
    negamax(&mut pos, 3, &mut full);
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_beta_cutoff_stops_after_first_child() {
    let mut pos = Position::startpos();
    let mut stats = SearchStats::default();
    let beta = -INFINITY + 1;
    let score = alpha_beta(&mut pos, -INFINITY, beta, 1, Frontier::Static, &mut stats);
    assert_eq!(score, beta);
    assert_eq!(stats.nodes, 1);
}

#[test]
fn test_root_search_returns_legal_move() {
    for algorithm in [
        RootAlgorithm::AlphaBeta(Frontier::Quiescence),
        RootAlgorithm::AlphaBeta(Frontier::Static),
        RootAlgorithm::Negamax,
    ] {
        let mut pos = Position::from_fen(MIDDLEGAME);
        let before = pos.clone();
        let mut stats = SearchStats::default();

        let best = root_search(&mut pos, 2, algorithm, &mut stats).expect("moves exist");

        assert!(legal_moves(&pos).contains(&best.mv));
        assert_eq!(pos, before, "{algorithm:?} must restore the position");
        assert!(stats.nodes > 0);
    }
}

#[test]
fn test_root_search_finds_back_rank_mate() {
    // gxh3 wins the queen, but Ra8 mates
    for algorithm in [
        RootAlgorithm::AlphaBeta(Frontier::Quiescence),
        RootAlgorithm::Negamax,
    ] {
        let mut pos = Position::from_fen(BACK_RANK_MATE);
        let mut stats = SearchStats::default();
        let best = root_search(&mut pos, 2, algorithm, &mut stats).expect("moves exist");
        assert_eq!(move_to_uci(best.mv), "a1a8", "{algorithm:?}");
        assert_eq!(best.score, INFINITY);
    }
}

#[test]
fn test_root_search_takes_free_queen() {
    let mut pos = Position::from_fen("4k3/8/8/3q1p2/4P3/2N5/8/4K3 w - - 0 1");
    let mut stats = SearchStats::default();
    let best = root_search(&mut pos, 2, RootAlgorithm::AlphaBeta(Frontier::Quiescence), &mut stats)
        .expect("moves exist");
    assert_eq!(best.mv.captured, Some(chess_core::PieceKind::Queen));
}

#[test]
fn test_root_search_without_moves() {
    let mut mated =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let mut stats = SearchStats::default();
    assert!(root_search(&mut mated, 2, RootAlgorithm::Negamax, &mut stats).is_none());
}

#[test]
fn test_root_search_is_deterministic() {
    let mut pos = Position::from_fen(MIDDLEGAME);
    let algorithm = RootAlgorithm::AlphaBeta(Frontier::Quiescence);
    let first = root_search(&mut pos, 2, algorithm, &mut SearchStats::default());
    let second = root_search(&mut pos, 2, algorithm, &mut SearchStats::default());
    assert_eq!(first, second);
}

#[test]
fn test_opening_move_only_at_first_ply() {
    let start = Position::startpos();
    let mv = opening_move(&start).expect("e2e4 at the initial position");
    assert_eq!(move_to_uci(mv), OPENING_MOVE);

    let mut after = Position::startpos();
    after.make_move(mv);
    assert!(opening_move(&after).is_none());

    let black_first =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    assert!(opening_move(&black_first).is_none());
}

#[test]
fn test_root_search_ties_go_to_first_generated_move() {
    // Bare kings: Kf2, Ke2 and Kd2 all reach eight squares and score alike
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 30");
    let moves = legal_moves(&pos);

    let scores: Vec<Score> = moves
        .iter()
        .map(|&mv| {
            let undo = pos.make_move(mv);
            let score = -negamax(&mut pos, 0, &mut SearchStats::default());
            pos.unmake_move(mv, undo);
            score
        })
        .collect();
    let top = scores.iter().copied().max().expect("kings can move");
    assert!(scores.iter().filter(|&&s| s == top).count() > 1, "{scores:?}");
    assert_eq!(scores[0], top);

    for algorithm in [
        RootAlgorithm::AlphaBeta(Frontier::Quiescence),
        RootAlgorithm::AlphaBeta(Frontier::Static),
        RootAlgorithm::Negamax,
    ] {
        let best = root_search(&mut pos, 1, algorithm, &mut SearchStats::default())
            .expect("moves exist");
        assert_eq!(best.mv, moves[0], "{algorithm:?}");
        assert_eq!(move_to_uci(best.mv), "e1f2");
    }
}
