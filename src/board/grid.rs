//! Grid topology for the fixed 5x6 board.
//!
//! Positions are (row, col) with (0, 0) in the upper-left corner. All
//! lookups are table-free arithmetic; neighbor lists live in a small
//! fixed-size buffer so nothing here allocates.

/// Number of rows on the board.
pub const ROWS: usize = 5;
/// Number of columns on the board.
pub const COLS: usize = 6;
/// Total number of cells.
pub const CELL_COUNT: usize = ROWS * COLS;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    /// Builds a position from signed coordinates, or None if off the board.
    pub fn checked(row: i64, col: i64) -> Option<Pos> {
        if row < 0 || col < 0 || row >= ROWS as i64 || col >= COLS as i64 {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }

    /// Row-major index into a cell array.
    #[inline]
    pub const fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Inverse of [`Pos::index`].
    #[inline]
    pub const fn from_index(idx: usize) -> Pos {
        Pos::new(idx / COLS, idx % COLS)
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

/// Every position in row-major scan order.
pub const ALL_POSITIONS: [Pos; CELL_COUNT] = {
    let mut out = [Pos::new(0, 0); CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        out[i] = Pos::from_index(i);
        i += 1;
    }
    out
};

/// Capacity implied by position class: corner 2, edge 3, interior 4.
pub const fn capacity_at(pos: Pos) -> u8 {
    let row_edge = pos.row == 0 || pos.row == ROWS - 1;
    let col_edge = pos.col == 0 || pos.col == COLS - 1;
    match (row_edge, col_edge) {
        (true, true) => 2,
        (true, false) | (false, true) => 3,
        (false, false) => 4,
    }
}

/// Up to four orthogonal neighbors of a cell.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    buf: [Pos; 4],
    len: usize,
}

impl Neighbors {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the in-bounds orthogonal neighbors in up, down, left, right order.
pub fn neighbors(pos: Pos) -> Neighbors {
    let mut n = Neighbors {
        buf: [pos; 4],
        len: 0,
    };
    let mut push = |p: Pos| {
        n.buf[n.len] = p;
        n.len += 1;
    };
    if pos.row > 0 {
        push(Pos::new(pos.row - 1, pos.col));
    }
    if pos.row + 1 < ROWS {
        push(Pos::new(pos.row + 1, pos.col));
    }
    if pos.col > 0 {
        push(Pos::new(pos.row, pos.col - 1));
    }
    if pos.col + 1 < COLS {
        push(Pos::new(pos.row, pos.col + 1));
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_counts_by_class() {
        assert_eq!(neighbors(Pos::new(0, 0)).len(), 2);
        assert_eq!(neighbors(Pos::new(0, 2)).len(), 3);
        assert_eq!(neighbors(Pos::new(2, 2)).len(), 4);
        assert_eq!(neighbors(Pos::new(4, 5)).len(), 2);
        assert_eq!(neighbors(Pos::new(3, 0)).len(), 3);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let n = neighbors(Pos::new(2, 3));
        assert_eq!(
            n.as_slice(),
            &[Pos::new(1, 3), Pos::new(3, 3), Pos::new(2, 2), Pos::new(2, 4)]
        );
        let corner = neighbors(Pos::new(4, 0));
        assert_eq!(corner.as_slice(), &[Pos::new(3, 0), Pos::new(4, 1)]);
    }

    #[test]
    fn neighbor_count_matches_capacity() {
        for pos in ALL_POSITIONS {
            assert_eq!(neighbors(pos).len(), capacity_at(pos) as usize, "{:?}", pos);
        }
    }

    #[test]
    fn capacities_by_class() {
        assert_eq!(capacity_at(Pos::new(0, 0)), 2);
        assert_eq!(capacity_at(Pos::new(0, 5)), 2);
        assert_eq!(capacity_at(Pos::new(4, 0)), 2);
        assert_eq!(capacity_at(Pos::new(0, 3)), 3);
        assert_eq!(capacity_at(Pos::new(2, 5)), 3);
        assert_eq!(capacity_at(Pos::new(2, 2)), 4);
    }

    #[test]
    fn all_positions_row_major() {
        assert_eq!(ALL_POSITIONS[0], Pos::new(0, 0));
        assert_eq!(ALL_POSITIONS[7], Pos::new(1, 1));
        assert_eq!(ALL_POSITIONS[CELL_COUNT - 1], Pos::new(4, 5));
        for (i, p) in ALL_POSITIONS.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(Pos::checked(-1, 0), None);
        assert_eq!(Pos::checked(0, 6), None);
        assert_eq!(Pos::checked(5, 0), None);
        assert_eq!(Pos::checked(4, 5), Some(Pos::new(4, 5)));
    }
}
