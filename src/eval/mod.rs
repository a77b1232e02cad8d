//! Position evaluation.
//!
//! Scores a board position from a given player's perspective. The
//! [`Evaluator`] trait is the seam the search scores through, so callers can
//! swap in instrumented or alternative evaluators.

pub mod chain;
pub(crate) mod heuristic;

pub use chain::chain_lengths;
pub use heuristic::{evaluate, evaluate_with_chains, LOSS_SCORE, WIN_SCORE};

use crate::board::{Board, Color};

/// Scores a board from one player's perspective. Higher is better for that
/// player.
pub trait Evaluator: Sync {
    fn score(&self, board: &Board, color: Color) -> i32;
}

/// The built-in heuristic, optionally with the chain-length bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heuristic {
    pub chain_bonus: bool,
}

impl Heuristic {
    pub const fn new(chain_bonus: bool) -> Self {
        Heuristic { chain_bonus }
    }
}

impl Evaluator for Heuristic {
    fn score(&self, board: &Board, color: Color) -> i32 {
        if self.chain_bonus {
            evaluate_with_chains(board, color)
        } else {
            evaluate(board, color)
        }
    }
}
