//! Cell state and orb colors.
//!
//! A cell holds a stack of same-colored orbs up to its capacity. The
//! capacity is fixed by grid position when the board is built.

/// The owner color of a cell, or of the orbs a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Color {
    /// Returns the single-character board-notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Color::Empty => 'w',
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }

    /// Parses a player color from its single-character abbreviation.
    /// `Empty` has no orb form, so only 'r' and 'b' are accepted.
    pub fn from_notation_char(c: char) -> Option<Color> {
        match c {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    /// Parses a player color from a name like "red" or "b".
    pub fn from_name(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "blue" | "b" => Some(Color::Blue),
            _ => None,
        }
    }

    /// Returns the opposing player color. `Empty` maps to itself.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
            Color::Empty => Color::Empty,
        }
    }

    /// Returns the lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Empty => "empty",
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

/// One grid position's state.
///
/// `pending` is the transient explosion mark used during a chain-reaction
/// sweep; it is meaningless outside of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub color: Color,
    pub orbs: u8,
    pub capacity: u8,
    pub pending: bool,
}

impl Cell {
    /// Creates an empty cell with the given capacity.
    pub const fn empty(capacity: u8) -> Self {
        Cell {
            color: Color::Empty,
            orbs: 0,
            capacity,
            pending: false,
        }
    }

    /// True once the cell holds at least as many orbs as it can.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.orbs >= self.capacity
    }

    /// True when a single additional orb would make the cell explode.
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.capacity > 0 && self.orbs == self.capacity - 1
    }

    /// Clears orbs, color and the explosion mark.
    #[inline]
    pub fn reset(&mut self) {
        self.orbs = 0;
        self.color = Color::Empty;
        self.pending = false;
    }
}
