//! Tests for the rule queries the match harness adjudicates with
//!
//! - Stalemate
//! - Fifty-move rule
//! - Insufficient material
//! - Position keys for threefold repetition

use chess_core::{Color, PieceKind, Position, is_stalemate, legal_moves_into, play_uci_moves};

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemates() {
    for fen in [
        // Queen covers every flight square of the cornered king
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        // King and pawn: the pawn on g7 shields the defender from check
        "6k1/6P1/6K1/8/8/8/8/8 b - - 0 1",
        // Queen and king box in the king on h8
        "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
    ] {
        let mut pos = Position::from_fen(fen);
        let mut moves = Vec::new();
        legal_moves_into(&mut pos, &mut moves);
        assert!(moves.is_empty(), "{fen} should leave Black without moves");
        assert!(!pos.in_check(Color::Black), "{fen} is not check");
        assert!(is_stalemate(&mut pos));
    }
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_threshold() {
    let at = |clock: u32| Position::from_fen(&format!("8/8/8/4k3/8/4K3/8/8 w - - {clock} 60"));
    assert!(!at(99).is_fifty_move_draw());
    assert!(at(100).is_fifty_move_draw());
    assert!(at(140).is_fifty_move_draw());
}

#[test]
fn test_fifty_move_clock_resets_on_pawn_move_and_capture() {
    let mut pos = Position::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    assert_eq!(play_uci_moves(&mut pos, "e2e3"), 1);
    assert_eq!(pos.halfmove_clock, 0);

    // Quiet king moves count up, a capture resets
    let mut pos = Position::from_fen("8/8/8/4k3/8/3K4/8/7r w - - 99 60");
    assert_eq!(play_uci_moves(&mut pos, "d3d2"), 1);
    assert!(pos.is_fifty_move_draw());
    let mut pos = Position::from_fen("8/8/8/4k3/8/8/3K4/3r4 w - - 98 60");
    assert_eq!(play_uci_moves(&mut pos, "d2d1"), 1);
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.count(Color::Black, PieceKind::Rook), 0);
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_single_minor() {
    let bishop = Position::from_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1");
    let knight = Position::from_fen("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1");
    assert!(bishop.is_insufficient_material());
    assert!(knight.is_insufficient_material());
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        assert!(
            !Position::from_fen(fen).is_insufficient_material(),
            "{fen} should have mating material"
        );
    }
}

// =============================================================================
// Position Key Tests (for threefold repetition)
// =============================================================================

#[test]
fn test_position_key_ignores_clocks() {
    let pos1 =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let pos2 =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5");
    assert_eq!(pos1.position_key(), pos2.position_key());
}

#[test]
fn test_position_key_distinguishes_side_castling_and_ep() {
    let base = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let black = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    let rights = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1");
    assert_ne!(base.position_key(), black.position_key());
    assert_ne!(base.position_key(), rights.position_key());

    let ep = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let no_ep = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    assert_ne!(ep.position_key(), no_ep.position_key());
}

#[test]
fn test_knight_shuffle_repeats_key() {
    let mut pos = Position::startpos();
    let start = pos.position_key();
    assert_eq!(play_uci_moves(&mut pos, "g1f3 g8f6 f3g1 f6g8"), 4);
    assert_eq!(pos.position_key(), start);
    assert_eq!(pos.ply_count(), 4);
}
