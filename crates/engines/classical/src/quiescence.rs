//! Quiescence search - search captures only to avoid the horizon effect.
//!
//! When the main search reaches depth 0 we keep following captures so the
//! position is not judged in the middle of an exchange. Recursion is bounded
//! by [`MAX_QUIESCENCE_PLY`] rather than by running out of captures.

use chess_core::{capture_moves_into, Position};

use crate::eval::evaluate;
use crate::ordering::order_moves;
use crate::search::SearchStats;
use crate::Score;

/// Deepest quiescence ply that still searches; one ply further returns beta.
pub const MAX_QUIESCENCE_PLY: u8 = 3;

/// Fail-hard quiescence search. Call with `ply = 0` from the frontier.
///
/// The frontier position itself was counted by the caller when it made the
/// move; only captures played here add to `stats.nodes`.
pub fn quiescence(
    pos: &mut Position,
    mut alpha: Score,
    beta: Score,
    ply: u8,
    stats: &mut SearchStats,
) -> Score {
    stats.max_qs_ply = stats.max_qs_ply.max(ply);

    let stand_pat = evaluate(pos);
    if stand_pat >= beta || ply > MAX_QUIESCENCE_PLY {
        return beta;
    }
    if alpha < stand_pat {
        alpha = stand_pat;
    }

    let mut captures = Vec::with_capacity(16);
    capture_moves_into(pos, &mut captures);
    order_moves(&mut captures);

    for mv in captures {
        let undo = pos.make_move(mv);
        stats.nodes += 1;
        let score = -quiescence(pos, -beta, -alpha, ply + 1, stats);
        pos.unmake_move(mv, undo);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

#[cfg(test)]
#[path = "quiescence_tests.rs"]
mod quiescence_tests;
