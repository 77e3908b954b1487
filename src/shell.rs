//! Line-oriented text front end.
//!
//! A thin command shell over the engine, suitable for driving games by hand
//! or from another process. One command per line; responses are prefixed
//! with `=` on success and `?` on failure, followed by the message.
//!
//! ## Commands
//!
//! - `show` - Render the board and game status
//! - `place <frog|snake|donkey> <row> <col>` - Place a piece (placement phase)
//! - `click <row> <col>` - Select or move a piece (movement phase)
//! - `genmove` - Let the AI take the current player's turn
//! - `candidates` - Moves the AI scored during its last search
//! - `difficulty [easy|medium|hard]` - Query or set the AI difficulty
//! - `remaining` - Remaining placements per player and kind
//! - `reset` - Start a new game
//! - `help` - List commands
//! - `quit` - Exit

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Board, GamePhase, PieceKind, Player};
use crate::search::{Difficulty, Searcher};

/// The list of known shell commands.
const KNOWN_COMMANDS: &[&str] = &[
    "candidates",
    "click",
    "difficulty",
    "genmove",
    "help",
    "place",
    "quit",
    "remaining",
    "reset",
    "show",
];

/// Shell state: one board, one AI.
pub struct Shell {
    board: Board,
    searcher: Searcher,
}

impl Shell {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            board: Board::new(),
            searcher: Searcher::new(difficulty, seed),
        }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(stdout, "{prefix} {message}")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "show" => (true, format!("\n{}{}", self.board, self.status())),

            "place" => {
                if args.len() < 3 {
                    return (false, "usage: place <frog|snake|donkey> <row> <col>".into());
                }
                let Some(kind) = parse_kind(args[0]) else {
                    return (false, format!("unknown piece kind: {}", args[0]));
                };
                let Some((row, col)) = parse_cell(&args[1..]) else {
                    return (false, "invalid coordinates".into());
                };
                let player = self.board.current_player();
                let before = self.board.remaining(player, kind);
                self.board.set_selected_kind(kind);
                self.board.place_piece(row, col);
                if self.board.remaining(player, kind) < before {
                    (true, self.status())
                } else {
                    (false, "placement rejected".into())
                }
            }

            "click" => {
                let Some((row, col)) = parse_cell(args) else {
                    return (false, "usage: click <row> <col>".into());
                };
                self.board.click_cell(row, col);
                let selected = match self.board.selection() {
                    Some((r, c)) => format!("selection: ({r}, {c})\n"),
                    None => String::new(),
                };
                (true, format!("{selected}{}", self.status()))
            }

            "genmove" => {
                if self.board.phase() == GamePhase::GameOver {
                    return (false, "game is over".into());
                }
                self.searcher.run_ai_turn(&mut self.board);
                (true, self.status())
            }

            "candidates" => {
                let candidates = self.searcher.last_candidates();
                if candidates.is_empty() {
                    return (true, "no candidates recorded".into());
                }
                let lines: Vec<String> = candidates
                    .iter()
                    .map(|m| {
                        format!(
                            "({}, {}) -> ({}, {})  score {}",
                            m.from_row, m.from_col, m.to_row, m.to_col, m.score
                        )
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            "difficulty" => match args.first() {
                None => (true, self.searcher.difficulty().name().into()),
                Some(arg) => match arg.parse::<Difficulty>() {
                    Ok(level) => {
                        self.searcher.set_difficulty(level);
                        (true, level.name().into())
                    }
                    Err(err) => (false, err),
                },
            },

            "remaining" => {
                let mut lines = Vec::new();
                for player in [Player::One, Player::Two] {
                    for kind in PieceKind::ALL {
                        lines.push(format!(
                            "{player} {}: {}/{}",
                            kind.label(),
                            self.board.remaining(player, kind),
                            kind.max_per_player()
                        ));
                    }
                }
                (true, lines.join("\n"))
            }

            "reset" => {
                self.board.reset_game();
                (true, self.status())
            }

            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn status(&self) -> String {
        let phase = match self.board.phase() {
            GamePhase::Placement => "placement",
            GamePhase::Movement => "movement",
            GamePhase::GameOver => "game over",
        };
        match self.board.phase() {
            GamePhase::GameOver => format!("phase: {phase}, winner: {}", self.board.winner()),
            _ => format!("phase: {phase}, to move: {}", self.board.current_player()),
        }
    }
}

fn parse_kind(s: &str) -> Option<PieceKind> {
    match s.to_ascii_lowercase().as_str() {
        "frog" | "f" => Some(PieceKind::Frog),
        "snake" | "s" => Some(PieceKind::Snake),
        "donkey" | "d" => Some(PieceKind::Donkey),
        _ => None,
    }
}

fn parse_cell(args: &[&str]) -> Option<(i32, i32)> {
    if args.len() < 2 {
        return None;
    }
    let row = args[0].parse().ok()?;
    let col = args[1].parse().ok()?;
    Some((row, col))
}
