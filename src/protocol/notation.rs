//! Board notation encoding and decoding.
//!
//! A compact single-token text form of a board, in the spirit of chess FEN:
//! five rows top to bottom separated by '/', each row six comma-separated
//! cells. A cell is '.' when empty, otherwise its orb count followed by the
//! owner's color character ('r' or 'b').
//!
//! Example: `1r,.,.,.,.,./.,.,.,.,.,./.,.,3b,.,.,./.,.,.,.,.,./.,.,.,.,.,1r`
//!
//! Capacities are implied by grid position.

use crate::board::{Board, Color, Pos, COLS, ROWS};

/// Errors that can occur during board-notation parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 5 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row}: expected 6 cells, got {count}")]
    WrongCellCount { row: usize, count: usize },

    #[error("invalid cell entry at ({row}, {col}): '{entry}'")]
    InvalidCell {
        row: usize,
        col: usize,
        entry: String,
    },

    #[error("invalid color character at ({row}, {col}): '{color}'")]
    InvalidColor { row: usize, col: usize, color: char },

    #[error("cell ({row}, {col}) holds {orbs} orbs but its capacity is {capacity}")]
    OverCapacity {
        row: usize,
        col: usize,
        orbs: u8,
        capacity: u8,
    },
}

/// Parses one cell entry into (color, orbs).
fn parse_cell(entry: &str, pos: Pos) -> Result<(Color, u8), NotationError> {
    let invalid = || NotationError::InvalidCell {
        row: pos.row,
        col: pos.col,
        entry: entry.to_string(),
    };

    if entry == "." {
        return Ok((Color::Empty, 0));
    }

    let color_char = entry.chars().last().ok_or_else(invalid)?;
    let count_str = &entry[..entry.len() - color_char.len_utf8()];
    if count_str.is_empty() || !count_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let color = Color::from_notation_char(color_char).ok_or(NotationError::InvalidColor {
        row: pos.row,
        col: pos.col,
        color: color_char,
    })?;
    let orbs: u8 = count_str.parse().map_err(|_| invalid())?;
    if orbs == 0 {
        return Err(invalid());
    }
    Ok((color, orbs))
}

/// Parses a board-notation string into a `Board`.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != ROWS {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut board = Board::new();
    for (row, row_str) in rows.iter().enumerate() {
        let cells: Vec<&str> = row_str.split(',').map(str::trim).collect();
        if cells.len() != COLS {
            return Err(NotationError::WrongCellCount {
                row,
                count: cells.len(),
            });
        }
        for (col, entry) in cells.iter().enumerate() {
            let pos = Pos::new(row, col);
            let (color, orbs) = parse_cell(entry, pos)?;
            let capacity = board.capacity(pos);
            if orbs >= capacity {
                return Err(NotationError::OverCapacity {
                    row,
                    col,
                    orbs,
                    capacity,
                });
            }
            board.set(pos, color, orbs);
        }
    }

    Ok(board)
}

/// Encodes a board into its canonical notation string.
pub fn encode_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .map(|cells| {
            cells
                .iter()
                .map(|c| {
                    if c.orbs == 0 {
                        ".".to_string()
                    } else {
                        format!("{}{}", c.orbs, c.color.notation_char())
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    rows.join("/")
}
