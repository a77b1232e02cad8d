//! Engine protocol handling.
//!
//! Line-based command parsing for the main loop and the single-token board
//! notation used to ship positions over it.

pub mod notation;
pub mod parser;

pub use notation::{encode_board, parse_board, NotationError};
pub use parser::{parse_command, Command, GoParams};
