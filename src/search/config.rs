//! Search parameters and their JSON loader.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::CELL_COUNT;

/// Default lookahead depth.
pub const DEFAULT_DEPTH: u32 = 2;
/// Deepest lookahead the engine will run.
pub const MAX_DEPTH: u32 = 6;
/// Default number of candidates kept per level.
pub const DEFAULT_BREADTH: usize = 10;

/// Errors that can occur when loading a search configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Tunable search parameters. Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lookahead levels; 1 scores the candidates without recursing.
    pub depth: u32,
    /// Candidates kept for expansion at every level.
    pub breadth: usize,
    /// Adds the chain-length bonus to the evaluation.
    pub chain_bonus: bool,
    /// Expands top-level candidates on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            breadth: DEFAULT_BREADTH,
            chain_bonus: false,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<SearchConfig>(s).map(|c| c.normalized())
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamps depth to 1..=MAX_DEPTH and breadth to 1..=CELL_COUNT.
    pub fn normalized(self) -> Self {
        SearchConfig {
            depth: self.depth.clamp(1, MAX_DEPTH),
            breadth: self.breadth.clamp(1, CELL_COUNT),
            ..self
        }
    }
}
