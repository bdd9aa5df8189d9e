//! Negamax search, with and without alpha-beta pruning
//!
//! Every function here explores a single position in place: each applied
//! move is undone before the function returns, so callers get their position
//! back exactly as they passed it in.

use chess_core::{legal_moves_into, parse_uci_move, Color, Move, Position};

use crate::eval::evaluate;
use crate::quiescence::quiescence;
use crate::{best_of, Score, ValuedMove, INFINITY};

/// The fixed reply to the initial position.
pub const OPENING_MOVE: &str = "e2e4";

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered below the root, one per move made (quiescence
    /// captures included)
    pub nodes: u64,
    /// Deepest quiescence ply reached (0 = the frontier node itself)
    pub max_qs_ply: u8,
}

/// What alpha-beta does when the remaining depth reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontier {
    /// Follow captures with [`quiescence`]
    Quiescence,
    /// Static evaluation, clamped into the window
    Static,
}

/// Tree search run below each root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAlgorithm {
    /// Fail-hard alpha-beta with a full window per root move
    AlphaBeta(Frontier),
    /// Full-width negamax with static leaves
    Negamax,
}

/// Returns the fixed first move when `pos` is the very first ply of a game
/// with White to move.
pub fn opening_move(pos: &Position) -> Option<Move> {
    if pos.ply_count() == 0 && pos.side_to_move == Color::White {
        parse_uci_move(pos, OPENING_MOVE)
    } else {
        None
    }
}

/// Searches every legal move to `depth` plies and returns the best one.
///
/// Root moves are tried in generation order and a later move must score
/// strictly higher to replace the current best, so ties go to the earlier
/// move. Returns `None` when there are no legal moves.
pub fn root_search(
    pos: &mut Position,
    depth: u8,
    algorithm: RootAlgorithm,
    stats: &mut SearchStats,
) -> Option<ValuedMove> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    let child_depth = depth.saturating_sub(1);
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = pos.make_move(mv);
        stats.nodes += 1;
        let child = match algorithm {
            RootAlgorithm::AlphaBeta(frontier) => {
                alpha_beta(pos, -INFINITY, INFINITY, child_depth, frontier, stats)
            }
            RootAlgorithm::Negamax => negamax(pos, child_depth, stats),
        };
        pos.unmake_move(mv, undo);
        scored.push(ValuedMove::new(mv, -child));
    }

    best_of(scored)
}

/// Fail-hard alpha-beta in negamax form.
///
/// Returns a value clamped to `[alpha, beta]`. Children are searched in
/// generation order; the first child scoring at least `beta` ends the node.
pub fn alpha_beta(
    pos: &mut Position,
    mut alpha: Score,
    beta: Score,
    depth_left: u8,
    frontier: Frontier,
    stats: &mut SearchStats,
) -> Score {
    if depth_left == 0 {
        return match frontier {
            Frontier::Quiescence => quiescence(pos, alpha, beta, 0, stats),
            Frontier::Static => evaluate(pos).clamp(alpha, beta),
        };
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    for mv in moves {
        let undo = pos.make_move(mv);
        stats.nodes += 1;
        let score = -alpha_beta(pos, -beta, -alpha, depth_left - 1, frontier, stats);
        pos.unmake_move(mv, undo);

        if score >= beta {
            return beta; // Beta cutoff
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Full-width negamax with static leaves.
///
/// A node without legal moves scores `-INFINITY` for the side to move,
/// whether it is mated or stalemated.
pub fn negamax(pos: &mut Position, depth_left: u8, stats: &mut SearchStats) -> Score {
    if depth_left == 0 {
        return evaluate(pos);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    let mut best = -INFINITY;
    for mv in moves {
        let undo = pos.make_move(mv);
        stats.nodes += 1;
        let score = -negamax(pos, depth_left - 1, stats);
        pos.unmake_move(mv, undo);

        if score > best {
            best = score;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
