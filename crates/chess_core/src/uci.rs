use crate::{board::Position, movegen::legal_moves, types::*};

/// Long algebraic text of a move, `e2e4` or `e7e8q`.
pub fn move_to_uci(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from) + &sq_to_coord(mv.to);
    s.extend(mv.promo.map(PieceKind::letter));
    s
}

/// Resolve move text such as `e2e4` or `e7e8q` against the legal moves of `pos`.
///
/// Matching against the generator keeps the piece, victim and flags correct.
/// Returns `None` when the text is malformed or names no legal move.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(ch) => Some(PieceKind::from_letter(ch).filter(|k| PROMOTIONS.contains(k))?),
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Play a space-separated list of moves from `pos`, stopping at the first
/// one that is not legal. Returns how many moves were applied.
pub fn play_uci_moves(pos: &mut Position, moves: &str) -> usize {
    let mut applied = 0;
    for txt in moves.split_whitespace() {
        match parse_uci_move(pos, txt) {
            Some(mv) => {
                pos.make_move(mv);
                applied += 1;
            }
            None => break,
        }
    }
    applied
}
