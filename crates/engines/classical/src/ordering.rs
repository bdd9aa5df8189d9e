//! Capture ordering for quiescence search (MVV-LVA)

use chess_core::Move;

use crate::eval::SEARCH_VALUES;

/// Sort key for a move: lower sorts first.
///
/// Captures get `-(10 * victim - attacker)`, so the most valuable victim
/// comes first and the cheaper attacker breaks ties. Non-captures get
/// `i32::MAX` and sort last.
#[inline]
pub fn capture_key(mv: &Move) -> i32 {
    match mv.captured {
        Some(victim) => -(10 * SEARCH_VALUES.of(victim) - SEARCH_VALUES.of(mv.piece)),
        None => i32::MAX,
    }
}

/// Order moves in place by [`capture_key`], ascending.
///
/// The sort is stable: moves with equal keys keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(capture_key);
}
