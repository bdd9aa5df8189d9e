#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }
    /// Rank index (0..8) of this colour's back rank.
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    /// Rank step of this colour's pawn pushes.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Rank pawns double-push from.
    pub fn pawn_rank(self) -> i8 {
        self.back_rank() + self.forward()
    }
    /// Rank pawns promote on.
    pub fn promotion_rank(self) -> i8 {
        self.other().back_rank()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lower-case letter used by FEN and UCI promotions.
    pub fn letter(self) -> char {
        b"pnbrqk"[self.idx()] as char
    }

    /// Inverse of [`PieceKind::letter`], accepting either case.
    pub fn from_letter(ch: char) -> Option<PieceKind> {
        let lower = ch.to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.letter() == lower)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// A move as produced by the generator.
///
/// `piece` and `captured` are filled in from the position the move was
/// generated in, so two moves from the same position compare equal exactly
/// when their squares and flags do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promo: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promo: None,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub fn capturing(mut self, victim: PieceKind) -> Self {
        self.captured = Some(victim);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Pieces a pawn may promote to, in generation order.
pub const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

// (file, rank) steps, in generation order
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// Squares are 0..64 with a1 = 0, h1 = 7 and h8 = 63.
#[inline]
pub fn file_of(sq: u8) -> i8 {
    (sq & 7) as i8
}
#[inline]
pub fn rank_of(sq: u8) -> i8 {
    (sq >> 3) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    let on_board = (0..8).contains(&file) && (0..8).contains(&rank);
    on_board.then(|| (rank * 8 + file) as u8)
}

/// Square `(df, dr)` away from `from`, if it is on the board.
#[inline]
pub fn offset(from: u8, df: i8, dr: i8) -> Option<u8> {
    sq(file_of(from) + df, rank_of(from) + dr)
}

/// Squares along `(df, dr)` from `from` (exclusive) up to the board edge.
pub fn ray(from: u8, (df, dr): (i8, i8)) -> impl Iterator<Item = u8> {
    let mut cur = from;
    std::iter::from_fn(move || {
        cur = offset(cur, df, dr)?;
        Some(cur)
    })
}

/// Algebraic name of a square, `0 -> "a1"`.
pub fn sq_to_coord(sq: u8) -> String {
    let file = char::from(b'a' + sq % 8);
    let rank = char::from(b'1' + sq / 8);
    [file, rank].iter().collect()
}

/// Parse an algebraic square name such as `e4`.
pub fn coord_to_sq(c: &str) -> Option<u8> {
    let &[file, rank] = c.as_bytes() else {
        return None;
    };
    sq(
        file.checked_sub(b'a')? as i8,
        rank.checked_sub(b'1')? as i8,
    )
}
