//! Heuristic position evaluation.
//!
//! Scores a board from one player's point of view using material, cell
//! class (corners and edges are harder to take), readiness to explode, and
//! exposure to enemy cells that are one orb from bursting next door.
//!
//! Wiped-out positions short-circuit to fixed sentinels.

use crate::board::{neighbors, Board, Color, ALL_POSITIONS};

use super::chain::chain_lengths;

/// Score of a position where the opponent has been eliminated.
pub const WIN_SCORE: i32 = 10_000;
/// Score of a position where the mover has been eliminated.
pub const LOSS_SCORE: i32 = -10_000;

/// Bonus for an unthreatened corner cell.
const CORNER_BONUS: i32 = 3;
/// Bonus for an unthreatened edge cell.
const EDGE_BONUS: i32 = 2;
/// Bonus for an unthreatened cell one orb from exploding.
const CRITICAL_BONUS: i32 = 2;
/// Threat penalty is `THREAT_BASE - capacity` of the threatening neighbor.
const THREAT_BASE: i32 = 5;
/// Per-cell weight of the chain-length bonus.
const CHAIN_WEIGHT: i32 = 2;

/// Evaluates a board from `color`'s perspective.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let (score, mine, enemy) = base_score(board, color);
    match terminal_score(mine, enemy) {
        Some(t) => t,
        None => score,
    }
}

/// Evaluates a board and adds the chain-length bonus for non-terminal
/// positions.
pub fn evaluate_with_chains(board: &Board, color: Color) -> i32 {
    let (mut score, mine, enemy) = base_score(board, color);
    if let Some(t) = terminal_score(mine, enemy) {
        return t;
    }
    for len in chain_lengths(board, color) {
        score = score.saturating_add(CHAIN_WEIGHT.saturating_mul(len));
    }
    score
}

/// Returns (score before terminal override, own orbs, enemy orbs).
fn base_score(board: &Board, color: Color) -> (i32, i32, i32) {
    let opponent = color.opponent();
    let mut score: i32 = 0;
    let mut mine: i32 = 0;
    let mut enemy: i32 = 0;

    for pos in ALL_POSITIONS {
        let cell = board.cell(pos);
        if cell.color != color {
            enemy += cell.orbs as i32;
            continue;
        }

        mine += cell.orbs as i32;

        let mut threatened = false;
        for &n in neighbors(pos).iter() {
            let other = board.cell(n);
            if other.color == opponent && other.is_critical() {
                score = score.saturating_sub(THREAT_BASE - other.capacity as i32);
                threatened = true;
            }
        }
        if threatened {
            continue;
        }

        match cell.capacity {
            2 => score = score.saturating_add(CORNER_BONUS),
            3 => score = score.saturating_add(EDGE_BONUS),
            _ => {}
        }
        if cell.is_critical() {
            score = score.saturating_add(CRITICAL_BONUS);
        }
    }

    score = score.saturating_sub(enemy);
    (score, mine, enemy)
}

#[inline]
fn terminal_score(mine: i32, enemy: i32) -> Option<i32> {
    if enemy == 0 && mine > 1 {
        Some(WIN_SCORE)
    } else if mine == 0 && enemy > 1 {
        Some(LOSS_SCORE)
    } else {
        None
    }
}
