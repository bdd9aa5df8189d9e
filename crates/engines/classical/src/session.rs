use chess_core::{Color, Move};

/// Per-game memory of one bot.
///
/// Each running game owns its bots, and each bot owns its session, so
/// nothing here is ever shared between games.
#[derive(Debug, Clone, Default)]
pub struct Session {
    color: Option<Color>,
    last_move: Option<(u8, u8)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour this bot plays, fixed by the first position it is asked about.
    pub fn claim(&mut self, side_to_move: Color) -> Color {
        *self.color.get_or_insert(side_to_move)
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// `(from, to)` of the last move this bot played.
    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    pub fn remember(&mut self, mv: Move) {
        self.last_move = Some((mv.from, mv.to));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
