//! Engine command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Color;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
    pub breadth: Option<usize>,
}

/// A parsed controller-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the protocol handshake.
    Cri,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board from a notation string.
    Position { board: String },

    /// Set the color to move.
    SetPlayer { color: Color },

    /// Choose a placement with optional search limits.
    Go(GoParams),

    /// Accepted for compatibility; searches are synchronous.
    Stop,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, _) = tokens.split_first()?;

    match head {
        "cri" => Some(Command::Cri),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "stop" => Some(Command::Stop),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setplayer" => parse_setplayer(&tokens),
        "go" => Some(parse_go(&tokens)),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <board>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position <board>'");
        return None;
    }
    Some(Command::Position {
        board: tokens[1].to_string(),
    })
}

/// Parses `setplayer <red|blue>`.
fn parse_setplayer(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setplayer: expected 'setplayer <red|blue>'");
        return None;
    }
    match Color::from_name(tokens[1]) {
        Some(color) => Some(Command::SetPlayer { color }),
        None => {
            eprintln!("unknown player: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `go [depth <n>] [breadth <n>]`. Bad values are logged and ignored.
fn parse_go(tokens: &[&str]) -> Command {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if let Some(raw) = tokens.get(i) {
                    match raw.parse::<u32>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => eprintln!("invalid depth value: '{}'", raw),
                    }
                }
            }
            "breadth" => {
                i += 1;
                if let Some(raw) = tokens.get(i) {
                    match raw.parse::<usize>() {
                        Ok(v) => params.breadth = Some(v),
                        Err(_) => eprintln!("invalid breadth value: '{}'", raw),
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Command::Go(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("cri"), Some(Command::Cri));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("  stop  "), Some(Command::Stop));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        let cmd = parse_command("setoption name Depth value 3").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Depth".to_string(),
                value: Some("3".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        let cmd = parse_command("setoption name ChainBonus").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "ChainBonus".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn parse_setoption_malformed() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption Depth 3"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_position_command() {
        let board = ".,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,.";
        let cmd = parse_command(&format!("position {}", board)).unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                board: board.to_string()
            }
        );
        assert_eq!(parse_command("position"), None);
    }

    #[test]
    fn parse_setplayer_command() {
        assert_eq!(
            parse_command("setplayer red"),
            Some(Command::SetPlayer { color: Color::Red })
        );
        assert_eq!(
            parse_command("setplayer b"),
            Some(Command::SetPlayer { color: Color::Blue })
        );
        assert_eq!(parse_command("setplayer green"), None);
        assert_eq!(parse_command("setplayer"), None);
    }

    #[test]
    fn parse_go_params() {
        assert_eq!(parse_command("go"), Some(Command::Go(GoParams::default())));
        assert_eq!(
            parse_command("go depth 3 breadth 5"),
            Some(Command::Go(GoParams {
                depth: Some(3),
                breadth: Some(5),
            }))
        );
    }

    #[test]
    fn parse_go_ignores_bad_values() {
        assert_eq!(
            parse_command("go depth deep breadth 4 ponder"),
            Some(Command::Go(GoParams {
                depth: None,
                breadth: Some(4),
            }))
        );
    }
}
