//! Board representation and game-state types.
//!
//! Contains cells, grid topology, the acting player, and the board itself
//! with its explosion and chain-reaction rules.

pub mod cell;
pub mod grid;
pub mod player;
pub mod state;

pub use cell::{Cell, Color};
pub use grid::{capacity_at, neighbors, Neighbors, Pos, ALL_POSITIONS, CELL_COUNT, COLS, ROWS};
pub use player::Player;
pub use state::{Board, BoardView};
