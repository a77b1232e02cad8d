//! Chain-length feature.
//!
//! Groups a player's critical cells (one orb below capacity) into
//! orthogonally connected chains. One more orb anywhere in a chain sets the
//! whole chain off. A chain that borders a critical enemy cell can be set
//! off by the opponent first, so its length is reported negated.

use crate::board::{neighbors, Board, Color, Pos, ALL_POSITIONS, CELL_COUNT};

/// Returns the signed length of every critical chain owned by `color`, in
/// row-major order of each chain's first cell.
pub fn chain_lengths(board: &Board, color: Color) -> Vec<i32> {
    let opponent = color.opponent();
    let mut visited = [false; CELL_COUNT];
    let mut stack: [Pos; CELL_COUNT] = [Pos::new(0, 0); CELL_COUNT];
    let mut lengths = Vec::new();

    for start in ALL_POSITIONS {
        let cell = board.cell(start);
        if visited[start.index()] || cell.color != color || !cell.is_critical() {
            continue;
        }

        let mut len: i32 = 0;
        let mut exposed = false;
        let mut top = 0;
        stack[top] = start;
        top += 1;
        visited[start.index()] = true;

        while top > 0 {
            top -= 1;
            let pos = stack[top];
            len += 1;
            for &n in neighbors(pos).iter() {
                let other = board.cell(n);
                if !other.is_critical() {
                    continue;
                }
                if other.color == color && !visited[n.index()] {
                    visited[n.index()] = true;
                    stack[top] = n;
                    top += 1;
                } else if other.color == opponent {
                    exposed = true;
                }
            }
        }

        lengths.push(if exposed { -len } else { len });
    }

    lengths
}
