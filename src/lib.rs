//! Fission engine library.
//!
//! Exposes the board model with its chain-reaction rules, placement
//! application, evaluation, search, and protocol modules for use by
//! integration tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use engine::{select_placement, write_placement};
