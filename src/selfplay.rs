//! Sparring matches for measuring engine strength.
//!
//! Plays full games between the search engine and an opponent (a random
//! mover or another copy of the engine) and tallies the results. Only the
//! aggregate summary is kept; individual moves are not recorded.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Board, Color, Player};
use crate::eval::Heuristic;
use crate::movegen::{place_orb, random_placement};
use crate::search::{search, search_parallel, SearchConfig};

/// Who the engine plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Engine,
}

impl Opponent {
    pub fn from_name(s: &str) -> Option<Opponent> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Some(Opponent::Random),
            "engine" => Some(Opponent::Engine),
            _ => None,
        }
    }
}

/// Configuration for a sparring match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: usize,
    /// Search parameters for the engine side (and an engine opponent).
    pub search: SearchConfig,
    pub opponent: Opponent,
    /// Plies at the start of each game played at random by both sides.
    pub random_opening: u32,
    /// Games still running after this many plies are draws.
    pub max_plies: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            games: 20,
            search: SearchConfig::default(),
            opponent: Opponent::Random,
            random_opening: 2,
            max_plies: 300,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// Result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub engine_color: Color,
    /// The winning color, or None for a draw.
    pub winner: Option<Color>,
    pub plies: u32,
}

/// Aggregate result of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub avg_plies: f64,
}

impl MatchSummary {
    fn from_outcomes(outcomes: &[GameOutcome]) -> Self {
        let mut summary = MatchSummary {
            games: outcomes.len(),
            ..MatchSummary::default()
        };
        let mut total_plies = 0u64;
        for o in outcomes {
            total_plies += o.plies as u64;
            match o.winner {
                Some(w) if w == o.engine_color => summary.engine_wins += 1,
                Some(_) => summary.opponent_wins += 1,
                None => summary.draws += 1,
            }
        }
        if !outcomes.is_empty() {
            summary.avg_plies = total_plies as f64 / outcomes.len() as f64;
        }
        summary
    }
}

fn seeded_rng(seed: u64, game: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays one game. Red moves first; the engine takes red in even-numbered
/// games and blue in odd ones.
pub fn play_game(config: &MatchConfig, game: usize, rng: &mut SmallRng) -> GameOutcome {
    let engine_color = if game % 2 == 0 { Color::Red } else { Color::Blue };
    let search_config = config.search.normalized();
    let eval = Heuristic::new(search_config.chain_bonus);

    let mut board = Board::new();
    let mut to_move = Color::Red;
    let mut moved = [false; 2];
    let mut plies = 0u32;

    while plies < config.max_plies {
        let engine_turn = to_move == engine_color || config.opponent == Opponent::Engine;
        let target = if plies < config.random_opening || !engine_turn {
            random_placement(&board, to_move, rng)
        } else {
            let player = Player::new(to_move);
            let result = if search_config.parallel {
                search_parallel(&board, search_config.depth, search_config.breadth, &player, &eval)
            } else {
                search(&board, search_config.depth, search_config.breadth, &player, &eval)
            };
            result.pos
        };

        let pos = match target {
            Some(p) => p,
            None => {
                return GameOutcome {
                    engine_color,
                    winner: Some(to_move.opponent()),
                    plies,
                };
            }
        };

        let mut player = Player::new(to_move);
        if !place_orb(&mut board, pos, &mut player) {
            eprintln!("game {}: rejected placement {:?} for {}", game, pos, to_move.name());
            return GameOutcome {
                engine_color,
                winner: Some(to_move.opponent()),
                plies,
            };
        }
        plies += 1;
        moved[side_index(to_move)] = true;

        if moved[0] && moved[1] && !board.has_cells(to_move.opponent()) {
            return GameOutcome {
                engine_color,
                winner: Some(to_move),
                plies,
            };
        }
        to_move = to_move.opponent();
    }

    GameOutcome {
        engine_color,
        winner: None,
        plies,
    }
}

#[inline]
fn side_index(color: Color) -> usize {
    match color {
        Color::Blue => 1,
        _ => 0,
    }
}

/// Runs a full match and summarizes it.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_match(config: &MatchConfig) -> MatchSummary {
    let outcomes = if config.threads > 1 {
        run_parallel(config)
    } else {
        run_sequential(config)
    };
    MatchSummary::from_outcomes(&outcomes)
}

fn report(config: &MatchConfig, done: usize, outcome: &GameOutcome, secs: f64) {
    if config.quiet {
        return;
    }
    let result = match outcome.winner {
        Some(w) if w == outcome.engine_color => "engine wins",
        Some(_) => "opponent wins",
        None => "draw",
    };
    eprintln!(
        "Game {}/{}: {} after {} plies ({:.2}s)",
        done, config.games, result, outcome.plies, secs
    );
}

fn run_sequential(config: &MatchConfig) -> Vec<GameOutcome> {
    (0..config.games)
        .map(|i| {
            let start = Instant::now();
            let mut rng = seeded_rng(config.seed, i);
            let outcome = play_game(config, i, &mut rng);
            report(config, i + 1, &outcome, start.elapsed().as_secs_f64());
            outcome
        })
        .collect()
}

fn run_parallel(config: &MatchConfig) -> Vec<GameOutcome> {
    use rayon::prelude::*;

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build thread pool ({}); playing sequentially", e);
            return run_sequential(config);
        }
    };

    let completed = AtomicUsize::new(0);
    pool.install(|| {
        (0..config.games)
            .into_par_iter()
            .map(|i| {
                let start = Instant::now();
                let mut rng = seeded_rng(config.seed, i);
                let outcome = play_game(config, i, &mut rng);
                let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                report(config, n, &outcome, start.elapsed().as_secs_f64());
                outcome
            })
            .collect()
    })
}
