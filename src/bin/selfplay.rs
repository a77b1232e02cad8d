//! Sparring match CLI.
//!
//! Plays the engine against a random mover (or itself) and prints the
//! match summary as JSON on stdout.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 20)
//!   --depth N        Search depth (default: 2)
//!   --breadth N      Candidates kept per level (default: 10)
//!   --chain-bonus    Enable the chain-length evaluation bonus
//!   --config FILE    Load search parameters from a JSON file
//!   --opponent KIND  random | engine (default: random)
//!   --opening N      Random plies at the start of each game (default: 2)
//!   --max-plies N    Ply cap before a game is a draw (default: 300)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --quiet          Suppress per-game output

use std::env;
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use fission::search::SearchConfig;
use fission::selfplay::{self, MatchConfig, Opponent};

/// Parses the value following a flag, exiting with usage on failure.
fn value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse::<T>().ok()) {
        Some(v) => v,
        None => {
            eprintln!("invalid or missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();

    // A config file replaces the search defaults; later flags still win.
    if let Some(idx) = args.iter().position(|a| a == "--config") {
        let path: String = value(&args, idx + 1, "--config");
        match SearchConfig::from_json_file(Path::new(&path)) {
            Ok(search) => config.search = search,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = value(&args, i, "--games");
            }
            "--depth" => {
                i += 1;
                config.search.depth = value(&args, i, "--depth");
            }
            "--breadth" => {
                i += 1;
                config.search.breadth = value(&args, i, "--breadth");
            }
            "--chain-bonus" => {
                config.search.chain_bonus = true;
            }
            "--config" => {
                i += 1;
            }
            "--opponent" => {
                i += 1;
                let name: String = value(&args, i, "--opponent");
                config.opponent = match Opponent::from_name(&name) {
                    Some(o) => o,
                    None => {
                        eprintln!("unknown opponent: {}", name);
                        process::exit(1);
                    }
                };
            }
            "--opening" => {
                i += 1;
                config.random_opening = value(&args, i, "--opening");
            }
            "--max-plies" => {
                i += 1;
                config.max_plies = value(&args, i, "--max-plies");
            }
            "--threads" => {
                i += 1;
                config.threads = value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = value(&args, i, "--seed");
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    config.search = config.search.normalized();

    if !config.quiet {
        eprintln!(
            "Sparring: {} games vs {:?}, depth {}, breadth {}, {} threads",
            config.games, config.opponent, config.search.depth, config.search.breadth, config.threads
        );
    }

    let start = Instant::now();
    let summary = selfplay::run_match(&config);

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            summary.games,
            start.elapsed().as_secs_f64()
        );
    }

    match serde_json::to_string(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to encode summary: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 20)");
    eprintln!("  --depth N        Search depth (default: 2)");
    eprintln!("  --breadth N      Candidates kept per level (default: 10)");
    eprintln!("  --chain-bonus    Enable the chain-length evaluation bonus");
    eprintln!("  --config FILE    Load search parameters from a JSON file");
    eprintln!("  --opponent KIND  random | engine (default: random)");
    eprintln!("  --opening N      Random plies at the start of each game (default: 2)");
    eprintln!("  --max-plies N    Ply cap before a game is a draw (default: 300)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --quiet          Suppress per-game output");
    eprintln!("  --help           Show this help");
}
