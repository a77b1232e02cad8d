//! Board state and the explosion engine.
//!
//! `Board` is a plain `Copy` array of cells, so every lookahead branch gets
//! its own board by value. Chain reactions resolve in rounds: a sweep
//! explodes every cell marked at the start of the round, then the whole grid
//! is re-marked. A cell that overflows mid-sweep waits for the next round,
//! and that ordering decides which cells chain together.

use super::cell::{Cell, Color};
use super::grid::{capacity_at, neighbors, Pos, ALL_POSITIONS, CELL_COUNT, COLS, ROWS};

/// Read access to a board snapshot owned by someone else.
pub trait BoardView {
    fn orb_count(&self, row: usize, col: usize) -> u8;
    fn cell_capacity(&self, row: usize, col: usize) -> u8;
    fn cell_color(&self, row: usize, col: usize) -> Color;
}

/// The 5x6 simulation board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates an empty board with positional capacities.
    pub fn new() -> Self {
        let mut cells = [Cell::empty(0); CELL_COUNT];
        for pos in ALL_POSITIONS {
            cells[pos.index()] = Cell::empty(capacity_at(pos));
        }
        Board { cells }
    }

    /// Copies color, orb count and capacity out of an external snapshot.
    /// Explosion marks start cleared.
    pub fn from_view<V: BoardView + ?Sized>(view: &V) -> Self {
        let mut board = Board::new();
        for pos in ALL_POSITIONS {
            let cell = &mut board.cells[pos.index()];
            cell.color = view.cell_color(pos.row, pos.col);
            cell.capacity = view.cell_capacity(pos.row, pos.col);
            cell.orbs = view.orb_count(pos.row, pos.col);
        }
        board
    }

    #[inline]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.index()]
    }

    #[inline]
    pub fn orbs(&self, pos: Pos) -> u8 {
        self.cells[pos.index()].orbs
    }

    #[inline]
    pub fn capacity(&self, pos: Pos) -> u8 {
        self.cells[pos.index()].capacity
    }

    #[inline]
    pub fn color(&self, pos: Pos) -> Color {
        self.cells[pos.index()].color
    }

    /// Overwrites a cell's contents. Used to set up positions; does not
    /// trigger explosions.
    pub fn set(&mut self, pos: Pos, color: Color, orbs: u8) {
        let cell = &mut self.cells[pos.index()];
        cell.orbs = orbs;
        cell.color = if orbs == 0 { Color::Empty } else { color };
    }

    /// Empties a cell and clears its explosion mark.
    pub fn reset_cell(&mut self, pos: Pos) {
        self.cells[pos.index()].reset();
    }

    /// Adds one orb. The incoming color always takes the cell over.
    pub fn add_orb(&mut self, pos: Pos, color: Color) {
        let cell = &mut self.cells[pos.index()];
        cell.orbs = cell.orbs.saturating_add(1);
        cell.color = color;
    }

    /// True if the cell is at or over capacity. Pure.
    #[inline]
    pub fn is_full(&self, pos: Pos) -> bool {
        self.cells[pos.index()].is_full()
    }

    /// Marks the cell for explosion if it is full. Returns whether it is.
    pub fn mark_if_full(&mut self, pos: Pos) -> bool {
        let cell = &mut self.cells[pos.index()];
        if cell.is_full() {
            cell.pending = true;
            true
        } else {
            false
        }
    }

    /// Marks every full cell on the board.
    pub fn mark_all(&mut self) {
        for pos in ALL_POSITIONS {
            self.mark_if_full(pos);
        }
    }

    /// True if any cell carries an explosion mark.
    pub fn has_pending(&self) -> bool {
        self.cells.iter().any(|c| c.pending)
    }

    /// Empties the cell and hands one orb of its color to every in-bounds
    /// neighbor. Orbs above capacity are lost with the reset.
    pub fn explode(&mut self, pos: Pos) {
        let color = self.color(pos);
        self.reset_cell(pos);
        for &n in neighbors(pos).iter() {
            self.add_orb(n, color);
        }
    }

    /// Runs explosion rounds until one produces no explosion, or until
    /// `color` has eliminated its opponent. An early win can leave cells
    /// over capacity and marked.
    pub fn chain_react(&mut self, color: Color) {
        let mut changed = true;
        while changed {
            changed = false;
            for pos in ALL_POSITIONS {
                if self.cells[pos.index()].pending {
                    self.explode(pos);
                    changed = true;
                }
            }
            if self.is_won_by(color) {
                return;
            }
            self.mark_all();
        }
    }

    /// True if every non-empty cell belongs to `color`.
    pub fn is_won_by(&self, color: Color) -> bool {
        self.cells
            .iter()
            .all(|c| c.color == color || c.color == Color::Empty)
    }

    /// Total orbs of the given color.
    pub fn orb_total(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .filter(|c| c.color == color)
            .map(|c| c.orbs as u32)
            .sum()
    }

    /// True if the given color owns at least one cell.
    pub fn has_cells(&self, color: Color) -> bool {
        self.cells.iter().any(|c| c.color == color)
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..ROWS).map(move |r| &self.cells[r * COLS..(r + 1) * COLS])
    }
}

impl BoardView for Board {
    fn orb_count(&self, row: usize, col: usize) -> u8 {
        self.orbs(Pos::new(row, col))
    }

    fn cell_capacity(&self, row: usize, col: usize) -> u8 {
        self.capacity(Pos::new(row, col))
    }

    fn cell_color(&self, row: usize, col: usize) -> Color {
        self.color(Pos::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_with_positional_capacity() {
        let board = Board::new();
        for pos in ALL_POSITIONS {
            assert_eq!(board.orbs(pos), 0);
            assert_eq!(board.color(pos), Color::Empty);
            assert_eq!(board.capacity(pos), capacity_at(pos));
        }
    }

    #[test]
    fn add_orb_overwrites_color() {
        let mut board = Board::new();
        board.add_orb(Pos::new(2, 2), Color::Red);
        board.add_orb(Pos::new(2, 2), Color::Blue);
        assert_eq!(board.orbs(Pos::new(2, 2)), 2);
        assert_eq!(board.color(Pos::new(2, 2)), Color::Blue);
    }

    #[test]
    fn mark_if_full_is_separate_from_is_full() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Color::Red, 2);
        assert!(board.is_full(Pos::new(0, 0)));
        assert!(!board.cell(Pos::new(0, 0)).pending);
        assert!(board.mark_if_full(Pos::new(0, 0)));
        assert!(board.cell(Pos::new(0, 0)).pending);
        assert!(!board.mark_if_full(Pos::new(1, 1)));
    }

    #[test]
    fn explode_resets_and_spreads() {
        let mut board = Board::new();
        board.set(Pos::new(2, 2), Color::Blue, 4);
        board.explode(Pos::new(2, 2));
        assert_eq!(board.orbs(Pos::new(2, 2)), 0);
        assert_eq!(board.color(Pos::new(2, 2)), Color::Empty);
        for n in [Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)] {
            assert_eq!(board.orbs(n), 1);
            assert_eq!(board.color(n), Color::Blue);
        }
    }

    #[test]
    fn explode_captures_neighbors() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Color::Red, 2);
        board.set(Pos::new(0, 1), Color::Blue, 1);
        board.explode(Pos::new(0, 0));
        assert_eq!(board.color(Pos::new(0, 1)), Color::Red);
        assert_eq!(board.orbs(Pos::new(0, 1)), 2);
    }

    #[test]
    fn chain_react_waits_a_round_for_new_overflow() {
        // (0,0) explodes into (0,1) which becomes full during the sweep;
        // (0,1) is not marked yet so it only goes off in the next round.
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Color::Red, 2);
        board.set(Pos::new(0, 1), Color::Red, 2);
        board.set(Pos::new(4, 5), Color::Blue, 1);
        board.mark_all();
        assert!(board.cell(Pos::new(0, 0)).pending);
        assert!(!board.cell(Pos::new(0, 1)).pending);
        board.chain_react(Color::Red);
        assert!(!board.has_pending());
        assert!(ALL_POSITIONS.iter().all(|&p| !board.is_full(p)));
        // (0,1) exploded: it is empty and pushed an orb back into (0,0).
        assert_eq!(board.orbs(Pos::new(0, 1)), 0);
        assert_eq!(board.orbs(Pos::new(0, 0)), 1);
        assert_eq!(board.orbs(Pos::new(0, 2)), 1);
        assert_eq!(board.orbs(Pos::new(1, 1)), 1);
        assert_eq!(board.orbs(Pos::new(1, 0)), 1);
    }

    #[test]
    fn chain_react_stops_on_win() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Color::Red, 2);
        board.set(Pos::new(0, 1), Color::Blue, 2);
        board.mark_all();
        board.chain_react(Color::Red);
        // Blue got captured in the first round; the captured cell is over
        // capacity but the reaction stopped on the win.
        assert!(board.is_won_by(Color::Red));
        assert_eq!(board.orbs(Pos::new(0, 1)), 3);
    }

    #[test]
    fn win_ignores_empty_cells() {
        let mut board = Board::new();
        assert!(board.is_won_by(Color::Red));
        board.set(Pos::new(1, 1), Color::Red, 1);
        assert!(board.is_won_by(Color::Red));
        assert!(!board.is_won_by(Color::Blue));
    }

    #[test]
    fn from_view_copies_board() {
        let mut src = Board::new();
        src.set(Pos::new(3, 4), Color::Blue, 3);
        src.set(Pos::new(0, 5), Color::Red, 1);
        let copy = Board::from_view(&src);
        assert_eq!(copy, src);
    }

    #[test]
    fn orb_totals() {
        let mut board = Board::new();
        board.set(Pos::new(1, 1), Color::Red, 3);
        board.set(Pos::new(1, 2), Color::Red, 1);
        board.set(Pos::new(2, 2), Color::Blue, 2);
        assert_eq!(board.orb_total(Color::Red), 4);
        assert_eq!(board.orb_total(Color::Blue), 2);
        assert!(board.has_cells(Color::Blue));
    }
}
