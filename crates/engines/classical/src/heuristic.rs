//! Flat move scoring: no search tree, just a sum of one-ply heuristics.
//!
//! Each legal move is applied once, the opponent's replies are generated
//! once, and every heuristic reads from that shared snapshot. Scores are in
//! whole pawns (see [`HEURISTIC_VALUES`]) plus fixed bonuses and penalties.

use chess_core::{
    file_of, has_legal_move, legal_moves_into, rank_of, sq, Color, Move, Piece, PieceKind,
    Position,
};
use log::trace;

use crate::eval::{PieceValues, HEURISTIC_VALUES};
use crate::{best_of, Session, ValuedMove};

/// Total for a move that mates; beats every other total.
pub const MATE_SCORE: i32 = i32::MAX;
/// A reply of the opponent would mate us.
pub const ALLOWS_MATE_PENALTY: i32 = -10_000;
/// Per opponent reply that gives check.
pub const REPLY_CHECK_PENALTY: i32 = -5;
pub const CHECK_BONUS: i32 = 100;
pub const REVERSAL_PENALTY: i32 = -5;
pub const CENTRAL_PAWN_BONUS: i32 = 10;
/// Central pawn pushes only count this early in the game.
pub const CENTRAL_PAWN_PLIES: u32 = 10;
pub const BACK_RANK_PENALTY: i32 = -10;

/// Every heuristic's contribution for one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub mate: bool,
    pub attack: i32,
    pub castling: i32,
    pub back_rank: i32,
    pub reversal: i32,
    pub central_pawn: i32,
    pub castle_rights: i32,
    pub check_prevention: i32,
    pub checking: i32,
    pub exposed: i32,
    pub hanging: i32,
}

impl Breakdown {
    fn mating() -> Self {
        Self {
            mate: true,
            ..Self::default()
        }
    }

    pub fn total(&self) -> i32 {
        if self.mate {
            return MATE_SCORE;
        }
        self.attack
            + self.castling
            + self.back_rank
            + self.reversal
            + self.central_pawn
            + self.castle_rights
            + self.check_prevention
            + self.checking
            + self.exposed
            + self.hanging
    }
}

/// Score every legal move for the side to move, in generation order.
pub fn score_moves(pos: &mut Position, session: &Session) -> Vec<ValuedMove> {
    let color = session.color().unwrap_or(pos.side_to_move);
    let mut my_moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut my_moves);

    my_moves
        .iter()
        .map(|&mv| {
            let b = breakdown(pos, mv, color, session.last_move(), &my_moves);
            trace!("{} {:?} total {}", chess_core::move_to_uci(mv), b, b.total());
            ValuedMove::new(mv, b.total())
        })
        .collect()
}

/// Best move by total score; the earliest generated move wins ties.
pub fn pick_move(pos: &mut Position, session: &Session) -> Option<ValuedMove> {
    best_of(score_moves(pos, session))
}

/// Evaluate every heuristic for `mv`.
///
/// `my_moves` must be the legal moves of `pos`; `color` is the colour the
/// bot plays and `last_move` its previous `(from, to)`.
pub fn breakdown(
    pos: &mut Position,
    mv: Move,
    color: Color,
    last_move: Option<(u8, u8)>,
    my_moves: &[Move],
) -> Breakdown {
    let values = HEURISTIC_VALUES;
    let victim = pos.piece_at(mv.to).map_or(0, |pc| values.of(pc.kind));
    let my_attackers = attackers_value(my_moves, mv.to, &values);
    let rights_before = pos.castle_rights_count(color);
    let ply = pos.ply_count();
    // Castling never moves a pawn, so the shelter reads the same before and after
    let castling = castling_quality(pos, mv, color);

    let undo = pos.make_move(mv);
    let mut replies = Vec::with_capacity(64);
    legal_moves_into(pos, &mut replies);
    let gives_check = pos.in_check(pos.side_to_move);
    if gives_check && replies.is_empty() {
        pos.unmake_move(mv, undo);
        return Breakdown::mating();
    }
    let their_attackers = attackers_value(&replies, mv.to, &values);
    let rights_after = pos.castle_rights_count(color);
    let check_prevention = check_prevention(pos, &replies);
    pos.unmake_move(mv, undo);

    let contested = replies.iter().any(|r| r.to == mv.to);

    Breakdown {
        mate: false,
        attack: my_attackers + victim - their_attackers,
        castling,
        back_rank: back_rank(mv, color, &values),
        reversal: move_reversal(mv, last_move),
        central_pawn: central_pawn(mv, ply),
        castle_rights: if mv.is_castle {
            0
        } else {
            rights_after - rights_before
        },
        check_prevention,
        checking: if gives_check && !contested { CHECK_BONUS } else { 0 },
        exposed: if contested {
            -2 * values.of(mv.piece)
        } else {
            0
        },
        hanging: hanging_piece(&replies, &values),
    }
}

/// Material of the non-king pieces in `moves` that can move onto `target`.
pub fn attackers_value(moves: &[Move], target: u8, values: &PieceValues) -> i32 {
    moves
        .iter()
        .filter(|m| m.to == target && m.piece != PieceKind::King)
        .map(|m| values.of(m.piece))
        .sum()
}

/// Castling: one point for a rook file free of our own pawns on ranks 2 to 6,
/// one per pawn still sheltering the king. Zero for any other move.
pub fn castling_quality(pos: &Position, mv: Move, color: Color) -> i32 {
    if !mv.is_castle {
        return 0;
    }
    let own_pawn = Some(Piece {
        color,
        kind: PieceKind::Pawn,
    });
    let shelter_rank = match color {
        Color::White => 1,
        Color::Black => 6,
    };
    let (rook_file, shelter_files): (i8, &[i8]) = if file_of(mv.to) == 6 {
        (5, &[5, 6, 7])
    } else {
        (3, &[1, 2])
    };

    let open_file = (1..6)
        .filter_map(|r| sq(rook_file, r))
        .all(|s| pos.piece_at(s) != own_pawn);
    let shelter = shelter_files
        .iter()
        .filter_map(|&f| sq(f, shelter_rank))
        .filter(|&s| pos.piece_at(s) == own_pawn)
        .count() as i32;

    shelter + i32::from(open_file)
}

/// Developing a piece off the back rank earns its value; retreating onto
/// it costs a fixed penalty. Kings are exempt.
pub fn back_rank(mv: Move, color: Color, values: &PieceValues) -> i32 {
    if mv.piece == PieceKind::King {
        return 0;
    }
    let back = color.back_rank();
    if rank_of(mv.from) == back && rank_of(mv.to) != back {
        values.of(mv.piece)
    } else if rank_of(mv.to) == back {
        BACK_RANK_PENALTY
    } else {
        0
    }
}

pub fn move_reversal(mv: Move, last_move: Option<(u8, u8)>) -> i32 {
    match last_move {
        Some((from, to)) if mv.to == from && mv.from == to => REVERSAL_PENALTY,
        _ => 0,
    }
}

/// Early pawn moves onto the d/e files, ranks 3 to 6.
pub fn central_pawn(mv: Move, ply: u32) -> i32 {
    let central = matches!(file_of(mv.to), 3 | 4) && (2..=5).contains(&rank_of(mv.to));
    if ply < CENTRAL_PAWN_PLIES && mv.piece == PieceKind::Pawn && central {
        CENTRAL_PAWN_BONUS
    } else {
        0
    }
}

/// Look one reply ahead from the opponent's side.
///
/// Any mating reply sets the score to [`ALLOWS_MATE_PENALTY`] and ends the
/// scan; each checking reply before it costs [`REPLY_CHECK_PENALTY`].
pub fn check_prevention(pos: &mut Position, replies: &[Move]) -> i32 {
    let mut score = 0;
    for &reply in replies {
        let undo = pos.make_move(reply);
        let in_check = pos.in_check(pos.side_to_move);
        let mated = in_check && !has_legal_move(pos);
        pos.unmake_move(reply, undo);

        if mated {
            score = ALLOWS_MATE_PENALTY;
            break;
        }
        if in_check {
            score += REPLY_CHECK_PENALTY;
        }
    }
    score
}

/// Value of the most valuable piece (above a pawn) any reply captures, negated.
pub fn hanging_piece(replies: &[Move], values: &PieceValues) -> i32 {
    replies
        .iter()
        .filter_map(|r| r.captured)
        .map(|kind| values.of(kind))
        .filter(|&v| v > 1)
        .max()
        .map_or(0, |v| -v)
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod heuristic_tests;
