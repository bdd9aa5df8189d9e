use std::str::FromStr;

use thiserror::Error;

use crate::types::*;

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Which wing a castle happens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King = 0,
    Queen = 1,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];
}

/// Fixed squares involved in one castle.
#[derive(Clone, Copy, Debug)]
pub struct CastleLane {
    pub side: CastleSide,
    pub king_from: u8,
    pub king_to: u8,
    pub rook_from: u8,
    pub rook_to: u8,
    /// Must be empty.
    pub between: &'static [u8],
    /// Must not be attacked (the king's start square is checked separately).
    pub passes: &'static [u8],
}

const fn lane(
    side: CastleSide,
    king_from: u8,
    king_to: u8,
    rook_from: u8,
    rook_to: u8,
    between: &'static [u8],
    passes: &'static [u8],
) -> CastleLane {
    CastleLane {
        side,
        king_from,
        king_to,
        rook_from,
        rook_to,
        between,
        passes,
    }
}

// [colour][side]
static CASTLE_LANES: [[CastleLane; 2]; 2] = [
    [
        lane(CastleSide::King, 4, 6, 7, 5, &[5, 6], &[5, 6]),
        lane(CastleSide::Queen, 4, 2, 0, 3, &[3, 2, 1], &[3, 2]),
    ],
    [
        lane(CastleSide::King, 60, 62, 63, 61, &[61, 62], &[61, 62]),
        lane(CastleSide::Queen, 60, 58, 56, 59, &[59, 58, 57], &[59, 58]),
    ],
];

/// Both castle lanes of `c`, kingside first.
pub fn castle_lanes(c: Color) -> &'static [CastleLane; 2] {
    &CASTLE_LANES[c.idx()]
}

fn lane_for_king_move(c: Color, king_to: u8) -> Option<&'static CastleLane> {
    castle_lanes(c).iter().find(|l| l.king_to == king_to)
}

/// Castling rights indexed by colour then side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights([[bool; 2]; 2]);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights([[false; 2]; 2]);
    pub const ALL: CastlingRights = CastlingRights([[true; 2]; 2]);

    pub fn has(&self, c: Color, side: CastleSide) -> bool {
        self.0[c.idx()][side as usize]
    }

    pub fn set(&mut self, c: Color, side: CastleSide, allowed: bool) {
        self.0[c.idx()][side as usize] = allowed;
    }

    /// Drop every right tied to `square`: a king or rook leaving its home
    /// square, or a rook being captured there.
    pub fn touch(&mut self, square: u8) {
        for c in [Color::White, Color::Black] {
            for l in castle_lanes(c) {
                if square == l.king_from || square == l.rook_from {
                    self.set(c, l.side, false);
                }
            }
        }
    }

    /// Rights with the colours exchanged.
    pub fn swapped(self) -> CastlingRights {
        let [white, black] = self.0;
        CastlingRights([black, white])
    }

    fn bits(self) -> u64 {
        self.0
            .iter()
            .flatten()
            .enumerate()
            .fold(0, |acc, (i, &on)| acc | (u64::from(on) << i))
    }
}

/// Why a FEN string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    FieldCount(usize),
    #[error("rank {0} does not cover exactly 8 files")]
    BadRank(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("unknown piece '{0}'")]
    BadPiece(char),
    #[error("side to move must be 'w' or 'b', got '{0}'")]
    BadSide(String),
    #[error("unknown castling flag '{0}'")]
    BadCastling(char),
    #[error("invalid en passant square '{0}'")]
    BadEnPassant(String),
    #[error("invalid move counter '{0}'")]
    BadCounter(String),
}

/// Mailbox position. Searches mutate one instance in place through
/// [`Position::make_move`] / [`Position::unmake_move`] and must undo every
/// move they apply, in reverse order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square skipped by a pawn that just advanced two ranks.
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// What [`Position::unmake_move`] needs to restore.
#[derive(Clone, Debug)]
pub struct Undo {
    moved: Piece,
    /// Square and piece removed by the move; differs from `to` for en passant.
    captured: Option<(u8, Piece)>,
    castling: CastlingRights,
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Undo {
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, pc)| pc)
    }
}

/// State needed to take back a null move.
#[derive(Clone, Debug)]
pub struct NullUndo {
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_letter(ch)?;
    let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
    Some(Piece { color, kind })
}

fn flip_rank(s: u8) -> u8 {
    s ^ 56
}

impl FromStr for Position {
    type Err = FenError;

    /// Parse a FEN record. The move counters may be omitted and default to
    /// `0 1`.
    fn from_str(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::FieldCount(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        let mut board = [None; 64];
        for (i, row) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - i as i8;
            let mut file = 0i8;
            for ch in row.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file = Some(file + skip as i8)
                        .filter(|&f| skip > 0 && f <= 8)
                        .ok_or(FenError::BadRank(8 - i))?;
                    continue;
                }
                let piece = piece_from_char(ch).ok_or(FenError::BadPiece(ch))?;
                let s = sq(file, rank).ok_or(FenError::BadRank(8 - i))?;
                board[s as usize] = Some(piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRank(8 - i));
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSide(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        for flag in fields[2].chars().filter(|&f| f != '-') {
            let (c, side) = match flag {
                'K' => (Color::White, CastleSide::King),
                'Q' => (Color::White, CastleSide::Queen),
                'k' => (Color::Black, CastleSide::King),
                'q' => (Color::Black, CastleSide::Queen),
                _ => return Err(FenError::BadCastling(flag)),
            };
            castling.set(c, side, true);
        }

        let en_passant = match fields[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord).ok_or_else(|| FenError::BadEnPassant(coord.to_string()))?,
            ),
        };

        let counter = |idx: usize, default: u32| -> Result<u32, FenError> {
            match fields.get(idx) {
                None => Ok(default),
                Some(raw) => raw.parse().map_err(|_| FenError::BadCounter(raw.to_string())),
            }
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock: counter(4, 0)?,
            fullmove_number: counter(5, 1)?,
        })
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_fen(START_FEN)
    }

    /// Parse a FEN record known to be valid.
    ///
    /// # Panics
    /// On malformed input; use `str::parse` to handle errors instead.
    pub fn from_fen(fen: &str) -> Self {
        fen.parse()
            .unwrap_or_else(|e| panic!("invalid FEN {fen:?}: {e}"))
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        let king = Piece { color: c, kind: PieceKind::King };
        self.board
            .iter()
            .position(|&pc| pc == Some(king))
            .map(|i| i as u8)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Number of pieces of the given colour and kind on the board.
    pub fn count(&self, c: Color, kind: PieceKind) -> i32 {
        let wanted = Piece { color: c, kind };
        self.board.iter().filter(|&&pc| pc == Some(wanted)).count() as i32
    }

    /// Plies played since the standard initial position (0 there).
    pub fn ply_count(&self) -> u32 {
        let black = u32::from(self.side_to_move == Color::Black);
        self.fullmove_number.saturating_sub(1) * 2 + black
    }

    pub fn has_kingside_castle_right(&self, c: Color) -> bool {
        self.castling.has(c, CastleSide::King)
    }

    pub fn has_queenside_castle_right(&self, c: Color) -> bool {
        self.castling.has(c, CastleSide::Queen)
    }

    /// Castling rights still held by `c`, 0..=2.
    pub fn castle_rights_count(&self, c: Color) -> i32 {
        CastleSide::BOTH
            .iter()
            .filter(|&&side| self.castling.has(c, side))
            .count() as i32
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// True when neither side can possibly deliver mate: bare kings, or a
    /// single minor piece against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for pc in self.board.iter().flatten() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    /// FNV-1a style hash of placement, side to move, castling rights and en
    /// passant square. Equal positions in the repetition sense share a key.
    pub fn position_key(&self) -> u64 {
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let step = |h: u64, x: u64| (h ^ x).wrapping_mul(PRIME);

        let mut h = step(0xcbf2_9ce4_8422_2325, self.side_to_move.idx() as u64);
        h = step(h, 0x100 | self.castling.bits());
        h = step(h, self.en_passant.map_or(0xff, u64::from));
        for (i, pc) in self.board.iter().enumerate() {
            let code = pc.map_or(0, |pc| 1 + pc.kind.idx() as u64 + 6 * pc.color.idx() as u64);
            h = step(h, (i as u64) << 4 | code);
        }
        h
    }

    /// The same position with colours swapped and the board flipped
    /// vertically, so the side to move changes too.
    pub fn mirrored(&self) -> Position {
        let mut board = [None; 64];
        for (s, pc) in self.board.iter().enumerate() {
            board[flip_rank(s as u8) as usize] = pc.map(|pc| Piece {
                color: pc.color.other(),
                kind: pc.kind,
            });
        }
        Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling: self.castling.swapped(),
            en_passant: self.en_passant.map(flip_rank),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    fn pass_turn(&mut self) {
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
    }

    /// Pass the turn without moving a piece.
    ///
    /// Used to count the opponent's mobility; the resulting position is only
    /// ever queried and must be restored with [`Position::unmake_null_move`].
    pub fn make_null_move(&mut self) -> NullUndo {
        let undo = NullUndo {
            en_passant: self.en_passant.take(),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };
        self.halfmove_clock += 1;
        self.pass_turn();
        undo
    }

    pub fn unmake_null_move(&mut self, undo: NullUndo) {
        self.side_to_move = self.side_to_move.other();
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.king_sq(c)
            .is_some_and(|k| self.is_square_attacked(k, c.other()))
    }

    fn holds(&self, s: u8, by: Color, kinds: &[PieceKind]) -> bool {
        self.piece_at(s)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    }

    /// First occupied square along `dir` from `from`.
    fn first_blocker(&self, from: u8, dir: (i8, i8)) -> Option<u8> {
        ray(from, dir).find(|&s| self.piece_at(s).is_some())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        // A pawn of `by` attacks `target` from one rank behind it
        let back = -by.forward();
        let pawn = [-1, 1]
            .into_iter()
            .filter_map(|df| offset(target, df, back))
            .any(|s| self.holds(s, by, &[PieceKind::Pawn]));
        let leaper = |steps: &[(i8, i8)], kind: PieceKind| {
            steps
                .iter()
                .filter_map(|&(df, dr)| offset(target, df, dr))
                .any(|s| self.holds(s, by, &[kind]))
        };
        let slider = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&d| {
                self.first_blocker(target, d)
                    .is_some_and(|s| self.holds(s, by, &[kind, PieceKind::Queen]))
            })
        };

        pawn || leaper(&KNIGHT_STEPS[..], PieceKind::Knight)
            || leaper(&KING_STEPS[..], PieceKind::King)
            || slider(&DIAGONALS[..], PieceKind::Bishop)
            || slider(&ORTHOGONALS[..], PieceKind::Rook)
    }

    /// Apply a pseudo-legal move for the side to move.
    ///
    /// # Panics
    /// If `mv.from` is empty.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self
            .piece_at(mv.from)
            .expect("make_move: no piece on the from square");
        // an en passant victim sits one rank behind the target square
        let victim_sq = match offset(mv.to, 0, -moved.color.forward()) {
            Some(s) if mv.is_en_passant => s,
            _ => mv.to,
        };
        let captured = self.piece_at(victim_sq).map(|pc| (victim_sq, pc));

        let undo = Undo {
            moved,
            captured,
            castling: self.castling,
            en_passant: self.en_passant.take(),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        self.set_piece(victim_sq, None);
        self.set_piece(mv.from, None);
        let promotes =
            moved.kind == PieceKind::Pawn && rank_of(mv.to) == moved.color.promotion_rank();
        let landed = if promotes {
            Piece {
                color: moved.color,
                kind: mv.promo.unwrap_or(PieceKind::Queen),
            }
        } else {
            moved
        };
        self.set_piece(mv.to, Some(landed));

        if mv.is_castle
            && moved.kind == PieceKind::King
            && let Some(l) = lane_for_king_move(moved.color, mv.to)
        {
            let rook = self.piece_at(l.rook_from);
            self.set_piece(l.rook_from, None);
            self.set_piece(l.rook_to, rook);
        }

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            self.en_passant = Some((mv.from + mv.to) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.pass_turn();
        undo
    }

    /// Take back `mv`, which must be the last move applied.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if mv.is_castle
            && undo.moved.kind == PieceKind::King
            && let Some(l) = lane_for_king_move(undo.moved.color, mv.to)
        {
            let rook = self.piece_at(l.rook_to);
            self.set_piece(l.rook_to, None);
            self.set_piece(l.rook_from, rook);
        }

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved));
        if let Some((s, pc)) = undo.captured {
            self.set_piece(s, Some(pc));
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
