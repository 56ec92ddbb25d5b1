//! Line-oriented text protocol for driving a game.
//!
//! The framing follows GTP: each command may start with a numeric id,
//! successful replies start with `=` and failures with `?`, and every reply
//! is followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Empty the board and reset scores
//! - `play <x> <y>` - Place a stone for the player to move
//! - `undo`, `redo` - Step through the move history
//! - `turn` - The player to move
//! - `score` - All scores as `id:score` pairs
//! - `showboard` - Text rendering of the board
//! - `dead_cells` - Cells that can no longer be played
//! - `enclosures` - Recorded enclosures, one per line
//!
//! ## Example
//!
//! ```
//! use dots_rust::protocol::Session;
//!
//! let mut session = Session::default();
//! let mut out = Vec::new();
//! session.run("play 0 0\nturn\nquit\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("= 2"));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};

use crate::board::Point;
use crate::game::Game;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "dead_cells",
    "enclosures",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "redo",
    "score",
    "showboard",
    "turn",
    "undo",
    "version",
];

/// Protocol state: a single game.
#[derive(Default)]
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match self.dispatch(command, args) {
            Ok(response) => (true, response),
            Err(e) => (false, e.to_string()),
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<String> {
        let game = &mut self.game;
        let response = match command {
            "name" => "dots-rust".to_string(),
            "version" => env!("CARGO_PKG_VERSION").to_string(),
            "protocol_version" => "2".to_string(),
            "list_commands" => KNOWN_COMMANDS.join("\n"),
            "known_command" => {
                let cmd = args.first().ok_or_else(|| anyhow!("missing argument"))?;
                KNOWN_COMMANDS
                    .contains(&cmd.to_lowercase().as_str())
                    .to_string()
            }
            "quit" => String::new(),
            "clear_board" => {
                game.clear();
                String::new()
            }
            "play" => {
                let point = parse_point(args)?;
                match game.place(point)? {
                    Some(capture) => capture.captured.to_string(),
                    None => "0".to_string(),
                }
            }
            "undo" => match game.undo() {
                Some((x, y)) => format!("{x} {y}"),
                None => bail!("nothing to undo"),
            },
            "redo" => match game.redo() {
                Some((x, y)) => format!("{x} {y}"),
                None => bail!("nothing to redo"),
            },
            "turn" => game.current_player().id.to_string(),
            "score" => game
                .players
                .iter()
                .map(|p| format!("{}:{}", p.id, p.score))
                .collect::<Vec<_>>()
                .join(" "),
            "showboard" => format!("\n{}", game.board),
            "dead_cells" => game
                .board
                .dead_cells()
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" "),
            "enclosures" => game
                .board
                .enclosures()
                .iter()
                .map(|e| {
                    let vertices: Vec<String> =
                        e.vertices.iter().map(|(x, y)| format!("{x},{y}")).collect();
                    format!("{} {}", e.owner, vertices.join(" "))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            _ => bail!("unknown command: {command}"),
        };
        Ok(response)
    }
}

/// Parse `<x> <y>` integer arguments.
fn parse_point(args: &[&str]) -> Result<Point> {
    let [x, y] = args else {
        bail!("expected two coordinates");
    };
    let x = x.parse().with_context(|| format!("invalid x coordinate {x:?}"))?;
    let y = y.parse().with_context(|| format!("invalid y coordinate {y:?}"))?;
    Ok((x, y))
}
