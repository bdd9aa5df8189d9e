//! Material plus mobility evaluation

use chess_core::{legal_moves_into, Color, PieceKind, Position};

use crate::{Score, PAWN};

/// Whole-pawn piece values, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues([i32; 6]);

/// Table used by the evaluator and the capture orderer.
pub const SEARCH_VALUES: PieceValues = PieceValues([1, 3, 3, 5, 9, 200]);

/// Table used by the heuristic move scorer.
pub const HEURISTIC_VALUES: PieceValues = PieceValues([1, 3, 3, 5, 9, 100]);

impl PieceValues {
    #[inline]
    pub fn of(&self, kind: PieceKind) -> i32 {
        self.0[kind.idx()]
    }
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns tenths of a pawn:
/// - Positive = good for side to move
/// - Negative = bad for side to move
///
/// The position is handed back unchanged; counting the opponent's moves
/// needs a null move on it in between.
pub fn evaluate(pos: &mut Position) -> Score {
    let score = material_score(pos) + mobility_score(pos);

    // Convert to side-to-move perspective
    if pos.side_to_move == Color::White {
        score
    } else {
        -score
    }
}

/// White material minus black material, in tenths of a pawn.
pub fn material_score(pos: &Position) -> Score {
    let mut counts = [[0i32; 6]; 2];
    for pc in pos.board.iter().flatten() {
        counts[pc.color.idx()][pc.kind.idx()] += 1;
    }

    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let white = counts[Color::White.idx()][kind.idx()];
            let black = counts[Color::Black.idx()][kind.idx()];
            SEARCH_VALUES.of(kind) * (white - black) * PAWN
        })
        .sum()
}

/// White legal-move count minus black legal-move count.
///
/// One tenth of a pawn per move, so this is the 0.1-per-move mobility term.
pub fn mobility_score(pos: &mut Position) -> Score {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    let own = moves.len() as Score;

    let undo = pos.make_null_move();
    legal_moves_into(pos, &mut moves);
    let theirs = moves.len() as Score;
    pos.unmake_null_move(undo);

    if pos.side_to_move == Color::White {
        own - theirs
    } else {
        theirs - own
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
