//! Search and planning.
//!
//! Scores candidate placements with the evaluator and looks ahead through
//! the most promising ones to pick the next orb placement.

pub mod config;
pub mod lookahead;

pub use config::{ConfigError, SearchConfig, DEFAULT_BREADTH, DEFAULT_DEPTH, MAX_DEPTH};
pub use lookahead::{
    best_placement, candidate_scores, search, search_parallel, top_candidates, SearchResult,
    TopCandidates, ILLEGAL_SCORE,
};
