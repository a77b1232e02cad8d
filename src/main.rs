//! fission engine binary.
//!
//! Speaks the line protocol over stdio: one command in, zero or more
//! response lines out. A failed write to stdout ends the session.

use std::io::{self, BufRead};

use fission::engine::Engine;
use fission::protocol::parser::{parse_command, Command};

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // Blank and unrecognized lines are skipped.
        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Cri => engine.handle_cri(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::NewGame => {
                engine.new_game();
                Ok(())
            }
            Command::Position { board } => {
                if let Err(e) = engine.set_position(&board) {
                    eprintln!("{}", e);
                }
                Ok(())
            }
            Command::SetPlayer { color } => {
                engine.set_player(color);
                Ok(())
            }
            Command::Go(params) => engine.handle_go(&params, &mut out),
            // go is synchronous, so there is never a search to stop.
            Command::Stop => Ok(()),
            Command::Quit => break,
        };

        if let Err(e) = written {
            eprintln!("output closed: {}", e);
            break;
        }
    }
}
