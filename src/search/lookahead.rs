//! Breadth- and depth-limited placement search.
//!
//! Every legal placement is scored one ply deep, the best `breadth` are
//! kept, and each of those is expanded recursively. Recursion stays with
//! the same player at every level: it looks for strong follow-up placements
//! rather than opponent replies. A deeper line only replaces the one-ply
//! best when it scores strictly higher.

use std::io::{self, Write};
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{Board, Player, Pos, ALL_POSITIONS, CELL_COUNT};
use crate::eval::{Evaluator, Heuristic};
use crate::movegen::{apply_hypothetical, is_legal_target};

use super::config::SearchConfig;

/// Score assigned to cells the mover may not play. Never selected.
pub const ILLEGAL_SCORE: i32 = i32::MIN;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen placement, or None when the mover has no legal target.
    pub pos: Option<Pos>,
    pub score: i32,
    /// Number of evaluator calls made.
    pub nodes: u64,
}

/// The best candidates seen so far, highest score first.
#[derive(Debug, Clone, Copy)]
pub struct TopCandidates {
    slots: [(Pos, i32); CELL_COUNT],
    len: usize,
}

impl TopCandidates {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[(Pos, i32)] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn first(&self) -> Option<(Pos, i32)> {
        self.as_slice().first().copied()
    }
}

/// Scores every cell as a one-ply placement for `player`. Cells the player
/// may not play get [`ILLEGAL_SCORE`].
pub fn candidate_scores<E: Evaluator + ?Sized>(
    board: &Board,
    player: &Player,
    eval: &E,
) -> [i32; CELL_COUNT] {
    let color = player.color();
    let mut scores = [ILLEGAL_SCORE; CELL_COUNT];
    for pos in ALL_POSITIONS {
        if is_legal_target(board, pos, color) {
            let next = apply_hypothetical(board, pos, player);
            scores[pos.index()] = eval.score(&next, color);
        }
    }
    scores
}

/// Keeps the `breadth` highest scores by insertion into a sorted buffer.
/// Ties keep row-major scan order.
pub fn top_candidates(scores: &[i32; CELL_COUNT], breadth: usize) -> TopCandidates {
    let breadth = breadth.min(CELL_COUNT);
    let mut top = TopCandidates {
        slots: [(Pos::new(0, 0), ILLEGAL_SCORE); CELL_COUNT],
        len: 0,
    };
    if breadth == 0 {
        return top;
    }

    for pos in ALL_POSITIONS {
        let score = scores[pos.index()];
        if score == ILLEGAL_SCORE {
            continue;
        }
        let slot = top.slots[..top.len]
            .iter()
            .position(|&(_, s)| score > s)
            .unwrap_or(top.len);
        if slot >= breadth {
            continue;
        }
        let end = if top.len < breadth { top.len } else { breadth - 1 };
        top.slots.copy_within(slot..end, slot + 1);
        top.slots[slot] = (pos, score);
        top.len = (top.len + 1).min(breadth);
    }
    top
}

/// Runs the lookahead and returns the best first placement. Breadth is
/// clamped to 1..=CELL_COUNT.
pub fn search<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u32,
    breadth: usize,
    player: &Player,
    eval: &E,
) -> SearchResult {
    expand(board, depth.max(1), breadth.clamp(1, CELL_COUNT), player, eval, false)
}

/// Same as [`search`] but expands the top-level candidates on the rayon
/// pool. Branch results are reduced in candidate order, so the answer is
/// identical to the sequential one.
pub fn search_parallel<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u32,
    breadth: usize,
    player: &Player,
    eval: &E,
) -> SearchResult {
    expand(board, depth.max(1), breadth.clamp(1, CELL_COUNT), player, eval, true)
}

fn expand<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u32,
    breadth: usize,
    player: &Player,
    eval: &E,
    parallel: bool,
) -> SearchResult {
    let scores = candidate_scores(board, player, eval);
    let mut nodes = scores.iter().filter(|&&s| s != ILLEGAL_SCORE).count() as u64;
    let top = top_candidates(&scores, breadth);

    let (mut best_pos, mut best_score) = match top.first() {
        Some(best) => best,
        None => {
            return SearchResult {
                pos: None,
                score: eval.score(board, player.color()),
                nodes: nodes + 1,
            };
        }
    };

    if depth == 1 {
        return SearchResult {
            pos: Some(best_pos),
            score: best_score,
            nodes,
        };
    }

    let child = |&(pos, _): &(Pos, i32)| {
        let next = apply_hypothetical(board, pos, player);
        expand(&next, depth - 1, breadth, player, eval, false)
    };
    let deeper: Vec<SearchResult> = if parallel {
        top.as_slice().par_iter().map(child).collect()
    } else {
        top.as_slice().iter().map(child).collect()
    };

    for (&(pos, _), result) in top.as_slice().iter().zip(&deeper) {
        nodes += result.nodes;
        if result.score > best_score {
            best_score = result.score;
            best_pos = pos;
        }
    }

    SearchResult {
        pos: Some(best_pos),
        score: best_score,
        nodes,
    }
}

/// Runs a configured search with the built-in heuristic and reports it as
/// an `info` line on `out`.
pub fn best_placement<W: Write>(
    board: &Board,
    player: &Player,
    config: &SearchConfig,
    out: &mut W,
) -> io::Result<SearchResult> {
    let start = Instant::now();
    let config = config.normalized();
    let eval = Heuristic::new(config.chain_bonus);
    let result = if config.parallel {
        search_parallel(board, config.depth, config.breadth, player, &eval)
    } else {
        search(board, config.depth, config.breadth, player, &eval)
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    writeln!(
        out,
        "info depth {} nodes {} score {} time {}",
        config.depth, result.nodes, result.score, elapsed_ms
    )?;
    Ok(result)
}
