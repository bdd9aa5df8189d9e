use crate::{
    board::{castle_lanes, Position},
    types::*,
};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut scratch = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut out);
    out
}

/// Generate all legal moves into `out`, reusing its allocation.
///
/// The order is deterministic: origin squares a1..h8, and per piece the
/// fixed step order of its generator.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    MoveSink::new(pos, out).all();
    retain_legal(pos, out);
}

/// Generate legal captures only (en passant and capturing promotions included),
/// in the same relative order as [`legal_moves_into`].
pub fn capture_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    MoveSink::new(pos, out).all();
    out.retain(Move::is_capture);
    retain_legal(pos, out);
}

/// Drop moves that leave the mover's king attacked.
fn retain_legal(pos: &mut Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let safe = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        safe
    });
}

/// True if the side to move has at least one legal move.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    !moves.is_empty()
}

/// The side to move is in check and has no legal reply.
pub fn is_checkmate(pos: &mut Position) -> bool {
    pos.in_check(pos.side_to_move) && !has_legal_move(pos)
}

/// The side to move is not in check but has no legal move.
pub fn is_stalemate(pos: &mut Position) -> bool {
    !pos.in_check(pos.side_to_move) && !has_legal_move(pos)
}

/// Pseudo-legal generator for the side to move.
struct MoveSink<'a> {
    pos: &'a Position,
    us: Color,
    out: &'a mut Vec<Move>,
}

impl<'a> MoveSink<'a> {
    fn new(pos: &'a Position, out: &'a mut Vec<Move>) -> Self {
        let us = pos.side_to_move;
        Self { pos, us, out }
    }

    fn all(&mut self) {
        for from in 0..64u8 {
            let Some(pc) = self.pos.piece_at(from).filter(|pc| pc.color == self.us) else {
                continue;
            };
            match pc.kind {
                PieceKind::Pawn => self.pawn(from),
                PieceKind::Knight => self.leaps(from, pc.kind, &KNIGHT_STEPS),
                PieceKind::Bishop => self.slides(from, pc.kind, &DIAGONALS),
                PieceKind::Rook => self.slides(from, pc.kind, &ORTHOGONALS),
                PieceKind::Queen => {
                    self.slides(from, pc.kind, &DIAGONALS);
                    self.slides(from, pc.kind, &ORTHOGONALS);
                }
                PieceKind::King => {
                    self.leaps(from, pc.kind, &KING_STEPS);
                    self.castles(from);
                }
            }
        }
    }

    /// Push a move to `to` unless it holds a friendly piece. Returns true
    /// when `to` was empty, i.e. a slider may continue.
    fn target(&mut self, from: u8, to: u8, kind: PieceKind) -> bool {
        match self.pos.piece_at(to) {
            None => {
                self.out.push(Move::new(from, to, kind));
                true
            }
            Some(victim) => {
                if victim.color != self.us {
                    self.out.push(Move::new(from, to, kind).capturing(victim.kind));
                }
                false
            }
        }
    }

    fn leaps(&mut self, from: u8, kind: PieceKind, steps: &[(i8, i8)]) {
        for &(df, dr) in steps {
            if let Some(to) = offset(from, df, dr) {
                self.target(from, to, kind);
            }
        }
    }

    fn slides(&mut self, from: u8, kind: PieceKind, dirs: &[(i8, i8)]) {
        for &dir in dirs {
            for to in ray(from, dir) {
                if !self.target(from, to, kind) {
                    break;
                }
            }
        }
    }

    /// Push a pawn move, expanded into every promotion on the last rank.
    fn pawn_move(&mut self, mv: Move) {
        if rank_of(mv.to) != self.us.promotion_rank() {
            self.out.push(mv);
            return;
        }
        for promo in PROMOTIONS {
            self.out.push(Move {
                promo: Some(promo),
                ..mv
            });
        }
    }

    fn pawn(&mut self, from: u8) {
        let pos = self.pos;
        let fwd = self.us.forward();
        let empty = |s: &u8| pos.piece_at(*s).is_none();

        if let Some(one) = offset(from, 0, fwd).filter(empty) {
            self.pawn_move(Move::new(from, one, PieceKind::Pawn));
            if rank_of(from) == self.us.pawn_rank()
                && let Some(two) = offset(from, 0, 2 * fwd).filter(empty)
            {
                self.out.push(Move::new(from, two, PieceKind::Pawn));
            }
        }

        for df in [-1, 1] {
            let Some(to) = offset(from, df, fwd) else {
                continue;
            };
            match pos.piece_at(to) {
                Some(victim) if victim.color != self.us => {
                    self.pawn_move(Move::new(from, to, PieceKind::Pawn).capturing(victim.kind));
                }
                None if pos.en_passant == Some(to) => {
                    self.out.push(Move {
                        is_en_passant: true,
                        ..Move::new(from, to, PieceKind::Pawn).capturing(PieceKind::Pawn)
                    });
                }
                _ => {}
            }
        }
    }

    /// Castles are generated only from the home square, never out of or
    /// through check.
    fn castles(&mut self, from: u8) {
        let them = self.us.other();
        for lane in castle_lanes(self.us) {
            let open = lane.between.iter().all(|&s| self.pos.piece_at(s).is_none());
            if from != lane.king_from || !self.pos.castling.has(self.us, lane.side) || !open {
                continue;
            }
            if self.pos.in_check(self.us)
                || lane.passes.iter().any(|&s| self.pos.is_square_attacked(s, them))
            {
                continue;
            }
            self.out.push(Move {
                is_castle: true,
                ..Move::new(from, lane.king_to, PieceKind::King)
            });
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
