//! Engine state management.
//!
//! Holds the current board, the color to move, and engine options, and runs
//! the placement search for the `go` command. Also exposes the one-shot
//! entry points used by hosts that hand over their own board snapshot.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::{Board, BoardView, Color, Player, Pos, CELL_COUNT};
use crate::eval::Heuristic;
use crate::protocol::notation::parse_board;
use crate::protocol::parser::GoParams;
use crate::search::{
    best_placement, search, SearchConfig, DEFAULT_BREADTH, DEFAULT_DEPTH, MAX_DEPTH,
};

/// Chooses the next placement for `player` on an external board snapshot.
///
/// Uses depth 2 and breadth 10 with the plain heuristic. Returns None when
/// every cell belongs to the opponent. The snapshot is only read.
pub fn select_placement<V: BoardView + ?Sized>(view: &V, player: &Player) -> Option<Pos> {
    let board = Board::from_view(view);
    let config = SearchConfig::default();
    let eval = Heuristic::new(config.chain_bonus);
    search(&board, config.depth, config.breadth, player, &eval).pos
}

/// Buffer form of [`select_placement`]: writes `[row, col]` into `out` and
/// returns true, or writes `[-1, -1]` and returns false if there is no move.
pub fn write_placement<V: BoardView + ?Sized>(view: &V, player: &Player, out: &mut [i32; 2]) -> bool {
    match select_placement(view, player) {
        Some(pos) => {
            *out = [pos.row as i32, pos.col as i32];
            true
        }
        None => {
            *out = [-1, -1];
            false
        }
    }
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub player: Option<Color>,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates a new engine with no position or player.
    pub fn new() -> Self {
        Engine {
            position: None,
            player: None,
            options: HashMap::new(),
        }
    }

    /// Resets position and player for a new game. Options persist.
    pub fn new_game(&mut self) {
        self.position = None;
        self.player = None;
    }

    /// Sets the current board from its notation string.
    pub fn set_position(&mut self, notation: &str) -> Result<(), String> {
        match parse_board(notation) {
            Ok(board) => {
                self.position = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse board: {}", e)),
        }
    }

    /// Sets the color to move.
    pub fn set_player(&mut self, color: Color) {
        self.player = Some(color);
    }

    /// Sets an engine option. Names are matched case-insensitively.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options
            .insert(name.to_ascii_lowercase(), value.unwrap_or_default());
    }

    fn option<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.options.get(name).and_then(|v| v.parse::<T>().ok())
    }

    /// Boolean options accept "true"/"false"; a bare `setoption name X`
    /// switches X on.
    fn flag(&self, name: &str) -> Option<bool> {
        self.options
            .get(name)
            .map(|v| v.is_empty() || v.eq_ignore_ascii_case("true"))
    }

    /// Builds the search configuration from options, with `go` limits taking
    /// precedence.
    pub fn search_config(&self, params: &GoParams) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            depth: params
                .depth
                .or_else(|| self.option("depth"))
                .unwrap_or(defaults.depth),
            breadth: params
                .breadth
                .or_else(|| self.option("breadth"))
                .unwrap_or(defaults.breadth),
            chain_bonus: self.flag("chainbonus").unwrap_or(defaults.chain_bonus),
            parallel: self.flag("parallel").unwrap_or(defaults.parallel),
        }
        .normalized()
    }

    /// Handles the handshake: writes id, options, and `criok`.
    pub fn handle_cri<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name fission")?;
        writeln!(out, "id author fission")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            DEFAULT_DEPTH, MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name Breadth type spin default {} min 1 max {}",
            DEFAULT_BREADTH, CELL_COUNT
        )?;
        writeln!(out, "option name ChainBonus type check default false")?;
        writeln!(out, "option name Parallel type check default false")?;
        writeln!(out, "criok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: searches the current position and writes
    /// `bestmove <row> <col>`, or `bestmove none` without a legal target.
    pub fn handle_go<W: Write>(&self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let board = match &self.position {
            Some(b) => b,
            None => {
                eprintln!("go: no position set");
                return Ok(());
            }
        };

        let color = match self.player {
            Some(c) => c,
            None => {
                eprintln!("go: no player set");
                return Ok(());
            }
        };

        let config = self.search_config(params);
        let player = Player::new(color);
        let result = best_placement(board, &player, &config, out)?;

        match result.pos {
            Some(pos) => writeln!(out, "bestmove {} {}", pos.row, pos.col)?,
            None => {
                eprintln!("go: {} has no legal placement", color.name());
                writeln!(out, "bestmove none")?;
            }
        }
        out.flush()
    }
}
