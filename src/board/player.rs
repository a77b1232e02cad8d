//! The acting player.

use super::cell::Color;

/// A player as seen by the engine: a color plus the illegal-move flag that
/// a rejected placement raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    color: Color,
    illegal: bool,
}

impl Player {
    /// Creates a player for one of the two orb colors.
    pub const fn new(color: Color) -> Self {
        Player {
            color,
            illegal: false,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// True once a placement by this player has been rejected.
    #[inline]
    pub const fn is_illegal(&self) -> bool {
        self.illegal
    }

    pub fn set_illegal(&mut self) {
        self.illegal = true;
    }
}
